//! End-to-end reconciliation over real fixture trees.

use std::fs;
use std::path::Path;

use recompose_extensions::Catalog;
use recompose_reconcile::{ReconcileOptions, RequirementSet, reconcile};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// One project "foo" bundling extensions "a" and "b".
fn project_foo_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "modules/a/a.info.yml",
        "name: A\nproject: foo\ntype: module\n",
    );
    write(
        temp.path(),
        "modules/b/b.info.yml",
        "name: B\nproject: foo\ntype: module\n",
    );
    temp
}

fn options() -> ReconcileOptions {
    ReconcileOptions::with_vendor("vendor")
}

#[test]
fn test_empty_requirements_flags_each_extension() {
    let temp = project_foo_tree();
    let catalog = Catalog::build(temp.path()).unwrap();

    let result = reconcile(&catalog, &RequirementSet::default(), &options());

    assert_eq!(result.unreconciled.len(), 2);
    assert_eq!(result.unreconciled["a"], "vendor/a");
    assert_eq!(result.unreconciled["b"], "vendor/b");
}

#[test]
fn test_empty_requirements_prefer_projects_flags_project_once() {
    let temp = project_foo_tree();
    let catalog = Catalog::build(temp.path()).unwrap();

    let result = reconcile(
        &catalog,
        &RequirementSet::default(),
        &options().prefer_projects(true),
    );

    assert_eq!(result.unreconciled.len(), 1);
    assert_eq!(result.unreconciled["foo"], "vendor/foo");
}

#[test]
fn test_required_project_settles_everything() {
    let temp = project_foo_tree();
    let catalog = Catalog::build(temp.path()).unwrap();
    let requirements =
        RequirementSet::from_json_str(r#"{"require": {"vendor/foo": "^1.0"}}"#).unwrap();

    let result = reconcile(&catalog, &requirements, &options());

    assert!(result.unreconciled.is_empty());
    assert_eq!(result.specified["vendor/foo"], "^1.0");
    assert!(result.is_settled());
}

#[test]
fn test_mixed_tree_classifies_disjointly() {
    let temp = TempDir::new().unwrap();
    // Declared project, already required.
    write(
        temp.path(),
        "modules/token/token.info.yml",
        "name: Token\nproject: token\n",
    );
    // Declared project, not required.
    write(
        temp.path(),
        "modules/views/views.info",
        "name = Views\nproject = views\n",
    );
    // No project at all.
    write(
        temp.path(),
        "modules/custom/custom.info.yml",
        "name: Custom glue\n",
    );
    // Hidden and test-only never reach the result.
    write(
        temp.path(),
        "modules/ghost/ghost.info.yml",
        "name: Ghost\nproject: ghost\nhidden: true\n",
    );
    write(
        temp.path(),
        "modules/fixture/fixture.info.yml",
        "name: Fixture\nproject: fixture\npackage: testing\n",
    );

    let catalog = Catalog::build(temp.path()).unwrap();
    let requirements = RequirementSet::from_json_str(
        r#"{
            "require": {"vendor/token": "^1.5", "unrelated/package": "^9.0"},
            "require-dev": {"vendor/devtool": "^2.0"}
        }"#,
    )
    .unwrap();

    let result = reconcile(&catalog, &requirements, &options());

    assert_eq!(result.specified.len(), 1);
    assert_eq!(result.specified["vendor/token"], "^1.5");
    assert_eq!(result.unreconciled.len(), 1);
    assert_eq!(result.unreconciled["views"], "vendor/views");
    assert_eq!(result.exotic.len(), 1);
    assert_eq!(result.exotic["custom"], "Custom glue");
}

#[test]
fn test_exotic_unchanged_by_requirements() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "modules/x/x.info.yml", "name: X\n");
    let catalog = Catalog::build(temp.path()).unwrap();

    for document in [
        r#"{}"#,
        r#"{"require": {"vendor/x": "^1.0"}}"#,
        r#"{"require-dev": {"vendor/y": "^2.0"}}"#,
    ] {
        let requirements = RequirementSet::from_json_str(document).unwrap();
        let result = reconcile(&catalog, &requirements, &options());
        assert_eq!(result.exotic.len(), 1, "document: {document}");
        assert_eq!(result.exotic["x"], "X");
    }
}

#[test]
fn test_reconcile_is_idempotent_over_one_snapshot() {
    let temp = project_foo_tree();
    let catalog = Catalog::build(temp.path()).unwrap();
    let requirements =
        RequirementSet::from_json_str(r#"{"require": {"vendor/a": "^1.0"}}"#).unwrap();

    let first = reconcile(&catalog, &requirements, &options());
    let second = reconcile(&catalog, &requirements, &options());
    assert_eq!(first, second);
}

#[test]
fn test_legacy_and_structured_extensions_reconcile_together() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "sites/all/modules/old/old.info",
        "name = Old Module\nproject = shared\nversion = \"7.x-1.0\"\n",
    );
    write(
        temp.path(),
        "modules/new/new.info.yml",
        "name: New Module\nproject: shared\nversion: 8.x-1.0\n",
    );

    let catalog = Catalog::build(temp.path()).unwrap();
    assert_eq!(catalog.extensions_for_project("shared").len(), 2);

    let result = reconcile(
        &catalog,
        &RequirementSet::default(),
        &options().prefer_projects(true),
    );
    assert_eq!(result.unreconciled.len(), 1);
    assert_eq!(result.unreconciled["shared"], "vendor/shared");
}

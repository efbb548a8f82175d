//! The name reconciler.

use std::collections::{BTreeMap, BTreeSet};

use recompose_extensions::Catalog;
use serde::Serialize;

use crate::requirements::RequirementSet;

/// The reserved vendor namespace for managed packages.
///
/// The ecosystem's package facade publishes every managed extension and
/// project under this vendor, so only requirements in this namespace
/// participate in reconciliation.
pub const DEFAULT_VENDOR: &str = "legacy";

/// Policy knobs for one reconciliation pass.
#[derive(Debug, Clone)]
pub struct ReconcileOptions {
    /// Key unreconciled extensions by their project rather than by their own
    /// machine name. The facade accepts either, and requiring the project
    /// covers every extension it bundles at once.
    pub prefer_projects: bool,
    /// Vendor namespace used both to filter requirements and to synthesize
    /// package names.
    pub vendor: String,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            prefer_projects: false,
            vendor: DEFAULT_VENDOR.to_string(),
        }
    }
}

impl ReconcileOptions {
    /// Options with an explicit vendor namespace.
    pub fn with_vendor(vendor: impl Into<String>) -> Self {
        Self {
            vendor: vendor.into(),
            ..Self::default()
        }
    }

    /// Toggle project-preferred keying.
    pub fn prefer_projects(mut self, prefer_projects: bool) -> Self {
        self.prefer_projects = prefer_projects;
        self
    }
}

/// The outcome of one reconciliation pass: three disjoint classifications.
///
/// Carries no identity of its own; recompute it whenever the catalog or the
/// requirement set changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconciliationResult {
    /// Package name to declared constraint, for extensions whose package is
    /// already in the requirement set.
    pub specified: BTreeMap<String, String>,
    /// Extension or project name to synthesized package name, for extensions
    /// on disk with no matching requirement.
    pub unreconciled: BTreeMap<String, String>,
    /// Machine name to human-readable name, for extensions that declare no
    /// project and can never be resolved automatically.
    pub exotic: BTreeMap<String, String>,
}

impl ReconciliationResult {
    /// Whether everything on disk is accounted for in the manifest.
    pub fn is_settled(&self) -> bool {
        self.unreconciled.is_empty() && self.exotic.is_empty()
    }
}

/// Classify every cataloged extension against the declared requirements.
///
/// The facade lets a package be required either by extension name or by the
/// name of the project bundling it, so a requirement for one name may settle
/// several extensions. Exotic extensions are classified independently of the
/// requirement set; they match nothing meaningfully.
pub fn reconcile(
    catalog: &Catalog,
    requirements: &RequirementSet,
    options: &ReconcileOptions,
) -> ReconciliationResult {
    let merged = requirements.merged();
    let vendor_prefix = format!("{}/", options.vendor);

    // Names already required, by extension or project name.
    let mut required_names: BTreeSet<String> = merged
        .keys()
        .filter_map(|package| package.strip_prefix(&vendor_prefix))
        .filter_map(|name| name.split('/').next())
        .map(str::to_string)
        .collect();

    // A required extension satisfies its whole project: pull the project
    // name in so sibling extensions are not re-flagged.
    let projects_of_required: Vec<String> = required_names
        .iter()
        .filter_map(|name| catalog.extension(name))
        .filter_map(|record| record.project.clone())
        .collect();
    required_names.extend(projects_of_required);

    let mut result = ReconciliationResult::default();

    for record in catalog.exotic_extensions() {
        result
            .exotic
            .insert(record.machine_name.clone(), record.human_name.clone());
    }

    for project in catalog.project_names() {
        if required_names.contains(project) {
            continue;
        }
        for record in catalog.extensions_for_project(project) {
            if required_names.contains(&record.machine_name) {
                continue;
            }
            let key = if options.prefer_projects {
                project
            } else {
                record.machine_name.as_str()
            };
            result
                .unreconciled
                .insert(key.to_string(), format!("{}{}", vendor_prefix, key));
        }
    }

    for project in catalog.project_names() {
        let package = format!("{}{}", vendor_prefix, project);
        if let Some(constraint) = merged.get(&package) {
            result.specified.insert(package, constraint.clone());
        }
        for record in catalog.extensions_for_project(project) {
            let package = format!("{}{}", vendor_prefix, record.machine_name);
            if let Some(constraint) = merged.get(&package) {
                result.specified.insert(package, constraint.clone());
            }
        }
    }

    tracing::debug!(
        specified = result.specified.len(),
        unreconciled = result.unreconciled.len(),
        exotic = result.exotic.len(),
        "reconciliation pass complete"
    );
    result
}

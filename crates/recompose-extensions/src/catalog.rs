//! Extension catalog: discovery, grouping, queries.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use recompose_info::{InfoFormat, SymbolTable, parse};

use crate::error::{Error, Result};
use crate::record::ExtensionRecord;

/// Subtrees that never contain installable extensions.
///
/// `tests` is pruned because test fixtures ship unmarked test extensions,
/// especially themes.
const EXCLUDED_DIRS: &[&str] = &["core", "vendor", "tests"];

/// All extensions discovered under one root, grouped by declaring project.
///
/// Grouping is computed once at construction and frozen; every query returns
/// stable, consistent results for the same snapshot. Two reconciliations over
/// independent catalogs share nothing and may run in parallel.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// All records, keyed by machine name.
    extensions: BTreeMap<String, ExtensionRecord>,
    /// Machine names grouped by project name.
    projects: BTreeMap<String, Vec<String>>,
    /// Machine names with no declared project.
    exotic: Vec<String>,
}

impl Catalog {
    /// Scan `root` for extension metadata files and build a catalog.
    ///
    /// Uses the built-in symbol table for legacy metadata.
    pub fn build(root: &Path) -> Result<Catalog> {
        Self::build_with_symbols(root, &SymbolTable::with_builtins())
    }

    /// Scan with an explicit symbol table for legacy constant substitution.
    ///
    /// An unreadable directory is fatal; an individual file that cannot be
    /// read or parsed is skipped with a warning.
    pub fn build_with_symbols(root: &Path, symbols: &SymbolTable) -> Result<Catalog> {
        if !root.is_dir() {
            return Err(Error::NotADirectory(root.to_path_buf()));
        }
        let mut records = Vec::new();
        scan_directory(root, symbols, &mut records)?;
        Ok(Self::from_records(records))
    }

    /// Build a catalog from records the caller already has.
    ///
    /// When two records share a machine name the first one wins and the rest
    /// are dropped with a warning; `build` feeds records in sorted-path
    /// order, so the policy is deterministic for a given tree.
    pub fn from_records(records: Vec<ExtensionRecord>) -> Catalog {
        let mut extensions: BTreeMap<String, ExtensionRecord> = BTreeMap::new();
        for record in records {
            if let Some(existing) = extensions.get(&record.machine_name) {
                tracing::warn!(
                    machine_name = %record.machine_name,
                    kept = %existing.source_path.display(),
                    dropped = %record.source_path.display(),
                    "duplicate machine name; keeping first discovered"
                );
                continue;
            }
            extensions.insert(record.machine_name.clone(), record);
        }

        let mut projects: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut exotic = Vec::new();
        for (machine_name, record) in &extensions {
            match &record.project {
                Some(project) => projects
                    .entry(project.clone())
                    .or_default()
                    .push(machine_name.clone()),
                None => exotic.push(machine_name.clone()),
            }
        }

        Catalog {
            extensions,
            projects,
            exotic,
        }
    }

    /// All discovered extensions, in machine-name order.
    pub fn extensions(&self) -> impl Iterator<Item = &ExtensionRecord> {
        self.extensions.values()
    }

    /// Look up one extension by machine name.
    pub fn extension(&self, machine_name: &str) -> Option<&ExtensionRecord> {
        self.extensions.get(machine_name)
    }

    /// The extensions belonging to a project; empty for unknown projects.
    pub fn extensions_for_project(&self, project: &str) -> Vec<&ExtensionRecord> {
        self.projects
            .get(project)
            .map(|names| {
                names
                    .iter()
                    .filter_map(|name| self.extensions.get(name))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All project names, sorted.
    pub fn project_names(&self) -> Vec<&str> {
        self.projects.keys().map(String::as_str).collect()
    }

    /// Extensions with no declared project. These can never be mapped onto a
    /// package automatically.
    pub fn exotic_extensions(&self) -> Vec<&ExtensionRecord> {
        self.exotic
            .iter()
            .filter_map(|name| self.extensions.get(name))
            .collect()
    }

    /// The directory containing a named extension.
    pub fn path_for_extension(&self, machine_name: &str) -> Option<&Path> {
        self.extensions.get(machine_name)?.source_dir()
    }

    /// Number of cataloged extensions.
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Whether the catalog holds no extensions.
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

/// Recursively collect extension records under `dir`.
///
/// Entries are visited in sorted order so duplicate handling and grouping are
/// deterministic regardless of filesystem enumeration order.
fn scan_directory(
    dir: &Path,
    symbols: &SymbolTable,
    records: &mut Vec<ExtensionRecord>,
) -> Result<()> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|source| Error::Scan {
            path: dir.to_path_buf(),
            source,
        })?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()
        .map_err(|source| Error::Scan {
            path: dir.to_path_buf(),
            source,
        })?;
    paths.sort();

    for path in paths {
        if path.is_dir() {
            let excluded = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| EXCLUDED_DIRS.contains(&name));
            if excluded {
                tracing::debug!(path = %path.display(), "skipping excluded subtree");
                continue;
            }
            scan_directory(&path, symbols, records)?;
        } else if let Some(record) = record_from_file(&path, symbols) {
            records.push(record);
        }
    }
    Ok(())
}

/// Build a record from one candidate file, or `None` when the file is not a
/// cataloged extension.
fn record_from_file(path: &Path, symbols: &SymbolTable) -> Option<ExtensionRecord> {
    let format = InfoFormat::from_path(path)?;
    let file_name = path.file_name()?.to_str()?;
    let machine_name = format.machine_name(file_name)?;

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "skipping unreadable metadata file");
            return None;
        }
    };
    let info = match parse(&source, format, symbols) {
        Ok(info) => info,
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "skipping unparsable metadata file");
            return None;
        }
    };

    // Similarly-named files that are not extension metadata: structured
    // metadata must carry a name; legacy metadata must carry anything at all.
    let is_extension = match format {
        InfoFormat::Structured => info.contains_key("name"),
        InfoFormat::Legacy => !info.is_empty(),
    };
    if !is_extension {
        return None;
    }

    let record = ExtensionRecord::from_info(machine_name, &info, path);
    if record.hidden || record.is_test_only() {
        tracing::debug!(path = %path.display(), "skipping hidden or test-only extension");
        return None;
    }
    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(machine_name: &str, project: Option<&str>) -> ExtensionRecord {
        ExtensionRecord {
            machine_name: machine_name.to_string(),
            human_name: machine_name.to_uppercase(),
            project: project.map(str::to_string),
            raw_version: None,
            semantic_version: None,
            hidden: false,
            package_group: None,
            source_path: PathBuf::from(format!("{machine_name}/{machine_name}.info.yml")),
        }
    }

    #[test]
    fn test_from_records_groups_by_project() {
        let catalog = Catalog::from_records(vec![
            record("a", Some("proj")),
            record("b", Some("proj")),
            record("c", Some("other")),
            record("x", None),
        ]);

        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.project_names(), vec!["other", "proj"]);
        let proj: Vec<_> = catalog
            .extensions_for_project("proj")
            .iter()
            .map(|r| r.machine_name.as_str())
            .collect();
        assert_eq!(proj, vec!["a", "b"]);
        let exotic: Vec<_> = catalog
            .exotic_extensions()
            .iter()
            .map(|r| r.machine_name.as_str())
            .collect();
        assert_eq!(exotic, vec!["x"]);
    }

    #[test]
    fn test_unknown_project_is_empty() {
        let catalog = Catalog::from_records(vec![record("a", Some("proj"))]);
        assert!(catalog.extensions_for_project("nope").is_empty());
    }

    #[test]
    fn test_duplicate_machine_name_first_wins() {
        let mut first = record("dup", Some("one"));
        first.source_path = PathBuf::from("a/dup.info.yml");
        let mut second = record("dup", Some("two"));
        second.source_path = PathBuf::from("b/dup.info.yml");

        let catalog = Catalog::from_records(vec![first, second]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.extension("dup").unwrap().project.as_deref(),
            Some("one")
        );
    }

    #[test]
    fn test_path_for_extension() {
        let catalog = Catalog::from_records(vec![record("a", None)]);
        assert_eq!(catalog.path_for_extension("a"), Some(Path::new("a")));
        assert_eq!(catalog.path_for_extension("missing"), None);
    }

    #[test]
    fn test_queries_are_stable() {
        let catalog = Catalog::from_records(vec![
            record("a", Some("proj")),
            record("b", Some("proj")),
            record("x", None),
        ]);
        let first = catalog.project_names();
        let second = catalog.project_names();
        assert_eq!(first, second);
        assert_eq!(
            catalog.exotic_extensions().len(),
            catalog.exotic_extensions().len()
        );
    }
}

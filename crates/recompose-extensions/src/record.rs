//! Extension records.

use std::path::{Path, PathBuf};

use recompose_info::{InfoMap, InfoValue};
use serde::Serialize;

use crate::version;

/// The `package` value that marks a test-only extension.
const TESTING_PACKAGE: &str = "testing";

/// One discovered extension, derived from a single metadata file.
///
/// Records are owned by the catalog and never mutated after creation.
#[derive(Debug, Clone, Serialize)]
pub struct ExtensionRecord {
    /// Unique key within a catalog, derived from the metadata file's base
    /// name with the format suffix stripped.
    pub machine_name: String,
    /// Display name from the metadata `name` key; falls back to the machine
    /// name.
    pub human_name: String,
    /// The project that distributes this extension. Absent for exotic
    /// extensions, which have no known package origin.
    pub project: Option<String>,
    /// Version string exactly as declared.
    pub raw_version: Option<String>,
    /// Semantic rendering of `raw_version`; absent when normalization fails.
    pub semantic_version: Option<String>,
    /// Hidden extensions are internal and excluded from cataloging.
    pub hidden: bool,
    /// The metadata `package` grouping, used to exclude test-only extensions.
    pub package_group: Option<String>,
    /// The metadata file that produced this record.
    pub source_path: PathBuf,
}

impl ExtensionRecord {
    /// Build a record from parsed metadata.
    pub fn from_info(machine_name: impl Into<String>, info: &InfoMap, source_path: impl Into<PathBuf>) -> Self {
        let machine_name = machine_name.into();
        let human_name = scalar(info, "name").unwrap_or_else(|| machine_name.clone());
        let raw_version = scalar(info, "version");
        let semantic_version = raw_version
            .as_deref()
            .and_then(version::to_semantic_version);
        Self {
            human_name,
            project: scalar(info, "project"),
            raw_version,
            semantic_version,
            hidden: info.get("hidden").is_some_and(InfoValue::is_true),
            package_group: scalar(info, "package"),
            machine_name,
            source_path: source_path.into(),
        }
    }

    /// Whether this extension has no declared project.
    pub fn is_exotic(&self) -> bool {
        self.project.is_none()
    }

    /// Whether this extension belongs to the reserved testing package.
    pub fn is_test_only(&self) -> bool {
        self.package_group
            .as_deref()
            .is_some_and(|package| package.eq_ignore_ascii_case(TESTING_PACKAGE))
    }

    /// The directory containing the extension.
    pub fn source_dir(&self) -> Option<&Path> {
        self.source_path.parent()
    }
}

fn scalar(info: &InfoMap, key: &str) -> Option<String> {
    info.get(key).and_then(InfoValue::as_str).map(str::to_string)
}

//! Declared-dependency snapshots.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// A snapshot of a manifest's declared dependencies.
///
/// Partitioned into `require` and `require-dev`, each mapping a package name
/// (`vendor/name`) to a version constraint string. Immutable once
/// constructed; the engine never fetches or mutates the manifest itself.
/// A manifest without one or both sections yields empty maps, not an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequirementSet {
    #[serde(default)]
    require: BTreeMap<String, String>,
    #[serde(default, rename = "require-dev")]
    require_dev: BTreeMap<String, String>,
}

impl RequirementSet {
    /// Build a requirement set from maps the caller already has.
    pub fn new(
        require: BTreeMap<String, String>,
        require_dev: BTreeMap<String, String>,
    ) -> Self {
        Self {
            require,
            require_dev,
        }
    }

    /// Extract the requirement sections from a composer-style JSON document.
    ///
    /// All other manifest content is ignored.
    pub fn from_json_str(document: &str) -> Result<Self> {
        Ok(serde_json::from_str(document)?)
    }

    /// Read and extract the requirement sections from a manifest file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let document = fs::read_to_string(path).map_err(|source| Error::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&document)
    }

    /// The `require` section.
    pub fn require(&self) -> &BTreeMap<String, String> {
        &self.require
    }

    /// The `require-dev` section.
    pub fn require_dev(&self) -> &BTreeMap<String, String> {
        &self.require_dev
    }

    /// Both sections combined; a package declared in both keeps its dev
    /// constraint.
    pub fn merged(&self) -> BTreeMap<String, String> {
        let mut merged = self.require.clone();
        merged.extend(
            self.require_dev
                .iter()
                .map(|(package, constraint)| (package.clone(), constraint.clone())),
        );
        merged
    }

    /// Whether neither section declares anything.
    pub fn is_empty(&self) -> bool {
        self.require.is_empty() && self.require_dev.is_empty()
    }

    /// Requirement entries whose constraint does not parse as a semver
    /// range. Advisory only: a manifest may legitimately carry constraints
    /// outside the semver grammar, but these are worth surfacing.
    pub fn invalid_constraints(&self) -> Vec<(&str, &str)> {
        self.merged_entries()
            .filter(|(_, constraint)| semver::VersionReq::parse(constraint).is_err())
            .collect()
    }

    fn merged_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.require
            .iter()
            .filter(|(package, _)| !self.require_dev.contains_key(*package))
            .chain(self.require_dev.iter())
            .map(|(package, constraint)| (package.as_str(), constraint.as_str()))
    }
}

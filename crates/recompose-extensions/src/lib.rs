//! Extension discovery and cataloging for recompose.
//!
//! This crate walks a legacy codebase, turns every extension metadata file
//! into an [`ExtensionRecord`], and groups the records into a [`Catalog`]
//! keyed by machine name and by declaring project. The catalog is the
//! read-only input to reconciliation; it owns all records and never changes
//! after construction.

pub mod catalog;
pub mod error;
pub mod record;
pub mod version;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use record::ExtensionRecord;
pub use version::{extract_core_version_from_source, to_semantic_version};

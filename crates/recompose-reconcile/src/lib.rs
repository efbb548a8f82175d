//! Extension-to-package reconciliation for recompose.
//!
//! Given a [`Catalog`](recompose_extensions::Catalog) of on-disk extensions
//! and a [`RequirementSet`] snapshot of a manifest's declared dependencies,
//! [`reconcile`] classifies every extension into exactly one of three sets:
//!
//! - **specified**: its package is already declared; the constraint is
//!   re-exported so a manifest rebuild can carry it forward,
//! - **unreconciled**: on disk with no matching requirement; a package name
//!   is synthesized for it,
//! - **exotic**: no declared project, so no package identity can be derived
//!   automatically.
//!
//! The engine only produces this decision. Acting on it (writing manifest
//! links, prompting the user) belongs to collaborators.

pub mod error;
pub mod reconciler;
pub mod requirements;

pub use error::{Error, Result};
pub use reconciler::{DEFAULT_VENDOR, ReconcileOptions, ReconciliationResult, reconcile};
pub use requirements::RequirementSet;

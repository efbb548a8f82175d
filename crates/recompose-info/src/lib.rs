//! Extension metadata parsing for recompose.
//!
//! Legacy extension trees identify each extension with a metadata file in one
//! of two incompatible formats:
//!
//! - **Legacy** (`*.info`): a line-oriented `key = value` grammar with
//!   bracketed nesting (`stylesheets[all][] = style.css`), quoted or bare
//!   values, and symbolic-constant substitution (`hidden = TRUE`).
//! - **Structured** (`*.info.yml`): a YAML mapping.
//!
//! Both formats are parsed through a single call site, [`parse`], into the
//! same nested [`InfoMap`] shape. The format is chosen by file extension via
//! [`InfoFormat::from_path`], never by sniffing content.

pub mod error;
pub mod format;
mod legacy;
mod structured;
pub mod symbols;
pub mod value;

pub use error::{Error, Result};
pub use format::{InfoFormat, parse};
pub use symbols::SymbolTable;
pub use value::{InfoMap, InfoValue};

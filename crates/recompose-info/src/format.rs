//! Metadata format selection.

use std::path::Path;

use crate::error::Result;
use crate::symbols::SymbolTable;
use crate::value::InfoMap;
use crate::{legacy, structured};

/// Filename suffix of structured metadata files.
pub const STRUCTURED_SUFFIX: &str = ".info.yml";

/// Filename suffix of legacy metadata files.
pub const LEGACY_SUFFIX: &str = ".info";

/// The two on-disk metadata formats.
///
/// The format is decided by filename suffix alone; content is never sniffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoFormat {
    /// Line-oriented `key = value` grammar (`*.info`).
    Legacy,
    /// YAML mapping (`*.info.yml`).
    Structured,
}

impl InfoFormat {
    /// Determine the format from a file path, or `None` for files that are
    /// not metadata files at all.
    pub fn from_path(path: &Path) -> Option<InfoFormat> {
        let name = path.file_name()?.to_str()?;
        if name.ends_with(STRUCTURED_SUFFIX) {
            Some(InfoFormat::Structured)
        } else if name.ends_with(LEGACY_SUFFIX) {
            Some(InfoFormat::Legacy)
        } else {
            None
        }
    }

    /// The filename suffix for this format.
    pub fn suffix(&self) -> &'static str {
        match self {
            InfoFormat::Legacy => LEGACY_SUFFIX,
            InfoFormat::Structured => STRUCTURED_SUFFIX,
        }
    }

    /// Strip this format's suffix from a file name, yielding the extension's
    /// machine name.
    pub fn machine_name<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        file_name
            .strip_suffix(self.suffix())
            .filter(|stem| !stem.is_empty())
    }
}

/// Parse metadata file content in the given format.
///
/// The symbol table is only consulted by the legacy format; structured
/// metadata carries typed values already.
pub fn parse(source: &str, format: InfoFormat, symbols: &SymbolTable) -> Result<InfoMap> {
    match format {
        InfoFormat::Legacy => Ok(legacy::parse_legacy(source, symbols)),
        InfoFormat::Structured => structured::parse_structured(source),
    }
}

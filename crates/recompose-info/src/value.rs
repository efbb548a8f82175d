//! Parsed metadata values.

use std::collections::BTreeMap;

use serde::Serialize;

/// A parsed metadata file: string keys mapped to nested values.
pub type InfoMap = BTreeMap<String, InfoValue>;

/// A single metadata value.
///
/// Both metadata formats collapse into this shape: scalars stay strings
/// (numbers included), booleans and nulls keep their type so that strict
/// checks like `hidden: true` behave the same for both formats, and arrays
/// become maps keyed by their decimal index.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InfoValue {
    Null,
    Bool(bool),
    Scalar(String),
    Map(InfoMap),
}

impl InfoValue {
    /// The scalar string content, if this is a scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            InfoValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// The boolean content, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            InfoValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The nested map, if this is a map.
    pub fn as_map(&self) -> Option<&InfoMap> {
        match self {
            InfoValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Strict boolean-true check.
    ///
    /// Scalars like `"1"` or `"true"` do not count; only a real boolean does.
    pub fn is_true(&self) -> bool {
        matches!(self, InfoValue::Bool(true))
    }

    /// Force this value to be a map, replacing any other content, and return
    /// a mutable reference to it.
    pub(crate) fn as_map_mut_forced(&mut self) -> &mut InfoMap {
        if !matches!(self, InfoValue::Map(_)) {
            *self = InfoValue::Map(InfoMap::new());
        }
        match self {
            InfoValue::Map(map) => map,
            _ => unreachable!(),
        }
    }
}

//! Parser for structured `*.info.yml` metadata.

use crate::error::{Error, Result};
use crate::value::{InfoMap, InfoValue};

/// Parse structured metadata content.
///
/// The document root must be a mapping. Nesting is arbitrary; sequences
/// become maps keyed by decimal index so both formats share one shape.
/// Unknown keys are preserved, never an error.
pub(crate) fn parse_structured(source: &str) -> Result<InfoMap> {
    let doc: serde_yaml::Value = serde_yaml::from_str(source)?;
    match doc {
        serde_yaml::Value::Mapping(mapping) => Ok(convert_mapping(mapping)),
        _ => Err(Error::NotAMapping),
    }
}

fn convert_mapping(mapping: serde_yaml::Mapping) -> InfoMap {
    let mut map = InfoMap::new();
    for (key, value) in mapping {
        let Some(key) = key_to_string(&key) else {
            continue;
        };
        map.insert(key, convert_value(value));
    }
    map
}

fn key_to_string(key: &serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn convert_value(value: serde_yaml::Value) -> InfoValue {
    match value {
        serde_yaml::Value::Null => InfoValue::Null,
        serde_yaml::Value::Bool(b) => InfoValue::Bool(b),
        serde_yaml::Value::Number(n) => InfoValue::Scalar(n.to_string()),
        serde_yaml::Value::String(s) => InfoValue::Scalar(s),
        serde_yaml::Value::Sequence(items) => {
            let mut map = InfoMap::new();
            for (index, item) in items.into_iter().enumerate() {
                map.insert(index.to_string(), convert_value(item));
            }
            InfoValue::Map(map)
        }
        serde_yaml::Value::Mapping(mapping) => InfoValue::Map(convert_mapping(mapping)),
        serde_yaml::Value::Tagged(tagged) => convert_value(tagged.value),
    }
}

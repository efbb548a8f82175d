//! Parser for the legacy `*.info` key/value grammar.
//!
//! The grammar is line oriented. Each assignment looks like one of:
//!
//! ```text
//! name = Views
//! description = "Create customized lists; and \"queries\""
//! stylesheets[all][] = css/views.css
//! hidden = TRUE
//! ```
//!
//! Keys may contain balanced, non-nested bracket segments; an empty segment
//! appends at the next available array index. Values are double-quoted,
//! single-quoted (backslash escapes stripped), or bare. A bare single-word
//! value naming a known symbolic constant is replaced by that constant.
//! Lines that do not form a valid assignment (comments, blanks, noise) are
//! skipped. This grammar is load-bearing for a large existing ecosystem and
//! must not be "improved".

use crate::symbols::SymbolTable;
use crate::value::{InfoMap, InfoValue};

/// Parse legacy metadata content.
///
/// Never fails: content with no parsable assignment yields an empty map,
/// which callers treat as "not an extension".
pub(crate) fn parse_legacy(source: &str, symbols: &SymbolTable) -> InfoMap {
    let mut info = InfoMap::new();
    for line in source.lines() {
        let Some((key, raw_value)) = split_assignment(line) else {
            continue;
        };
        let segments = split_key_segments(key);
        let value = parse_value(raw_value, symbols);
        insert(&mut info, &segments, value);
    }
    info
}

/// Split a line into key and value at the first `=` outside brackets.
///
/// Returns `None` when the line is not a valid assignment: no separator, an
/// empty key, a stray `;`/`]`, or an unbalanced or nested bracket segment.
fn split_assignment(line: &str) -> Option<(&str, &str)> {
    let bytes = line.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'=' => {
                let key = line[..i].trim();
                if key.is_empty() {
                    return None;
                }
                return Some((key, &line[i + 1..]));
            }
            b';' | b']' => return None,
            b'[' => {
                // Bracket segments balance and do not nest.
                let close = bytes[i + 1..].iter().position(|&b| b == b']')?;
                if bytes[i + 1..i + 1 + close].contains(&b'[') {
                    return None;
                }
                i += close + 2;
            }
            _ => i += 1,
        }
    }
    None
}

/// Split a key into its bracket segments.
///
/// `foo[][bar]` becomes `["foo", "", "bar"]`; a key without brackets is a
/// single segment.
fn split_key_segments(key: &str) -> Vec<String> {
    let trimmed = key.trim_end_matches(']');
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = trimmed.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '[' {
            segments.push(std::mem::take(&mut current));
            continue;
        }
        if c == ']' && chars.peek() == Some(&'[') {
            chars.next();
            segments.push(std::mem::take(&mut current));
            continue;
        }
        current.push(c);
    }
    segments.push(current);
    segments
}

/// Parse the value side of an assignment.
fn parse_value(raw: &str, symbols: &SymbolTable) -> InfoValue {
    let trimmed = raw.trim();
    for quote in [b'"', b'\''] {
        if let Some(inner) = quoted_content(trimmed, quote) {
            return InfoValue::Scalar(strip_slashes(inner));
        }
    }
    if is_word(trimmed) {
        if let Some(value) = symbols.resolve(trimmed) {
            return value.clone();
        }
    }
    InfoValue::Scalar(trimmed.to_string())
}

/// Match a fully quoted value and return its inner content.
///
/// The closing quote is the first one not preceded by a backslash and must
/// end the value; anything else falls through to the bare-value rule.
fn quoted_content(trimmed: &str, quote: u8) -> Option<&str> {
    let bytes = trimmed.as_bytes();
    if bytes.len() < 2 || bytes[0] != quote {
        return None;
    }
    for i in 1..bytes.len() {
        if bytes[i] == quote && bytes[i - 1] != b'\\' {
            if i == bytes.len() - 1 {
                return Some(&trimmed[1..i]);
            }
            return None;
        }
    }
    None
}

/// Remove one level of backslash escaping (`\"` to `"`, `\\` to `\`).
fn strip_slashes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// A candidate for constant substitution: one non-empty ASCII word.
fn is_word(s: &str) -> bool {
    !s.is_empty()
        && s.bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Insert a value at the nested location named by the key segments.
///
/// Intermediate segments become maps, replacing any scalar already there; an
/// empty segment is the map's current length, which appends for
/// consecutively-numbered maps.
fn insert(info: &mut InfoMap, segments: &[String], value: InfoValue) {
    let Some((last, parents)) = segments.split_last() else {
        return;
    };
    let mut parent = info;
    for segment in parents {
        let key = resolve_segment(parent, segment);
        parent = parent
            .entry(key)
            .or_insert_with(|| InfoValue::Map(InfoMap::new()))
            .as_map_mut_forced();
    }
    let key = resolve_segment(parent, last);
    parent.insert(key, value);
}

fn resolve_segment(parent: &InfoMap, segment: &str) -> String {
    if segment.is_empty() {
        parent.len().to_string()
    } else {
        segment.to_string()
    }
}

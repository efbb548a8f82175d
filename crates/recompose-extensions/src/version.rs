//! Version normalization for ad-hoc extension version strings.
//!
//! Legacy extensions declare versions like `8.x-3.0`, `7.x-1.0-beta2`, or
//! `2.x-dev`; none of these are semantic versions. [`to_semantic_version`]
//! rewrites them into the shapes a package manifest can carry:
//!
//! - `3.0` becomes `3.0.0`
//! - `3.0-alpha1` becomes `3.0.0-alpha1`
//! - `1.x-dev` stays `1.x-dev`
//!
//! Absence of a result is a valid outcome, not an error: a version string the
//! rules do not cover propagates as "no semantic version" on the record.

use std::sync::LazyLock;

use regex::Regex;

/// A development version: leading major digit, anything, `-dev`.
static DEV_VERSION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d).+-dev$").unwrap());

/// A release version: `{major}.{minor}` with an optional stability tag.
static RELEASE_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d{1,2})\.(\d{0,2})(-(?:alpha|beta|rc|unstable)\d{1,2})?$").unwrap()
});

/// The version constant assignment in legacy core source text.
static CORE_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"const VERSION = '(\d\.\d\.(?:\d+|x)(?:-(?:beta|alpha|rc)[0-9])?(?:-dev)?)';")
        .unwrap()
});

/// Normalize an ad-hoc version string into a semantic version or constraint.
///
/// A leading `8.x-` core prefix is stripped first. Development versions
/// collapse to `{major}.x-dev`; releases are rewritten as
/// `{major}.{minor}.0` with any stability tag carried over. Anything else
/// yields `None`.
pub fn to_semantic_version(raw: &str) -> Option<String> {
    let version = raw.strip_prefix("8.x-").unwrap_or(raw);

    if version.ends_with("-dev") {
        if let Some(caps) = DEV_VERSION.captures(version) {
            return Some(format!("{}.x-dev", &caps[1]));
        }
        // No leading major digit to collapse onto; keep the string as-is.
        return Some(version.to_string());
    }

    let caps = RELEASE_VERSION.captures(version)?;
    let mut semantic = format!("{}.{}.0", &caps[1], &caps[2]);
    if let Some(stability) = caps.get(3) {
        semantic.push_str(stability.as_str());
    }
    Some(semantic)
}

/// Extract the core version from source text declaring the well-known
/// version constant.
///
/// A literal patch number combined with `-dev` (`8.6.11-dev`) is not a
/// meaningful pin; it collapses to the moving target `8.6.x-dev`.
pub fn extract_core_version_from_source(source: &str) -> Option<String> {
    let caps = CORE_VERSION.captures(source)?;
    let version = &caps[1];

    if version.contains("-dev") && version.matches('.').count() == 2 {
        let base = version.trim_end_matches("-dev");
        let (prefix, _patch) = base.rsplit_once('.')?;
        return Some(format!("{prefix}.x-dev"));
    }
    Some(version.to_string())
}

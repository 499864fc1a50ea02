//! Release and version resolution from a build descriptor.
//!
//! The build descriptor declares the project release as `version := "1.2.3"`.
//! [`find_release`] extracts that string and [`release_to_version`] shortens it
//! to the `major.minor` form shown in documentation headers.

use std::fmt;
use std::fs;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DocsReleaseError, Result};

/// Key looked up in the build descriptor when none is configured.
pub const DEFAULT_RELEASE_KEY: &str = "version";

/// Number of dot-separated segments kept by [`release_to_version`].
const VERSION_SEGMENTS: usize = 2;

/// What [`release_to_version`] does with a release that has a single segment
/// or an empty major/minor segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TruncationPolicy {
    /// Return the release unchanged (`"7"` -> `"7"`, `"1..2"` -> `"1..2"`).
    #[default]
    PassThrough,
    /// Fail with [`DocsReleaseError::Format`].
    Reject,
}

/// Finds the release declared under [`DEFAULT_RELEASE_KEY`] in a build descriptor.
///
/// # Returns
/// * `Ok(String)` - The quoted content of the first matching line, trimmed
/// * `Err(Io)` - If the file cannot be read
/// * `Err(NotFound)` - If no line declares the key
pub fn find_release(path: impl AsRef<Path>) -> Result<String> {
    find_release_with_key(path, DEFAULT_RELEASE_KEY)
}

/// Same as [`find_release`] but looks up `key` instead of `version`.
pub fn find_release_with_key(path: impl AsRef<Path>, key: &str) -> Result<String> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    find_release_in(&content, key)?.ok_or_else(|| DocsReleaseError::not_found(key, path))
}

/// Scans descriptor text for the first `<key> := "<release>"` line.
///
/// The key must start the line (after indentation), so `libversion := "x"`
/// does not match the key `version`.
pub fn find_release_in(content: &str, key: &str) -> Result<Option<String>> {
    let pattern = format!(r#"^\s*{}\s*:=\s*"([^"]*)""#, regex::escape(key));
    let re = Regex::new(&pattern)
        .map_err(|e| DocsReleaseError::config(format!("Invalid release key '{}': {}", key, e)))?;

    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    Ok(content.lines().find_map(|line| {
        re.captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    }))
}

/// Shortens a release to its first two dot-separated segments.
///
/// - `"1.2.3"` -> `"1.2"`
/// - `"3.0.0-SNAPSHOT"` -> `"3.0"`
/// - `"2.5"` -> `"2.5"`
/// - `"7"` -> `"7"` under [`TruncationPolicy::PassThrough`], an error under `Reject`
///
/// An empty release is always an error. A release with an empty major or
/// minor segment (`"1..2"`, `".5"`, `"1."`) is returned unchanged under
/// `PassThrough` and rejected under `Reject`.
pub fn release_to_version(release: &str, policy: TruncationPolicy) -> Result<String> {
    let release = release.trim();
    if release.is_empty() {
        return Err(DocsReleaseError::format("release string is empty"));
    }

    let segments: Vec<&str> = release.split('.').collect();
    let problem = if segments.len() < VERSION_SEGMENTS {
        Some("has no minor segment - expected at least MAJOR.MINOR")
    } else if segments[..VERSION_SEGMENTS].iter().any(|s| s.is_empty()) {
        Some("has an empty major or minor segment")
    } else {
        None
    };

    match (problem, policy) {
        (None, _) => Ok(segments[..VERSION_SEGMENTS].join(".")),
        (Some(_), TruncationPolicy::PassThrough) => Ok(release.to_string()),
        (Some(problem), TruncationPolicy::Reject) => Err(DocsReleaseError::format(format!(
            "'{}' {}",
            release, problem
        ))),
    }
}

/// A release identifier as declared in the build descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    raw: String,
    qualifier: Option<String>,
}

impl Release {
    /// Wraps a release string, picking out a pre-release qualifier if present.
    ///
    /// Semver pre-release tags are used when the string is valid semver;
    /// otherwise anything after the first `-` counts as the qualifier
    /// (`"2.0-RC1"` -> `RC1`).
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim().to_string();
        let qualifier = match semver::Version::parse(&raw) {
            Ok(v) if v.pre.is_empty() => None,
            Ok(v) => Some(v.pre.as_str().to_string()),
            Err(_) => raw
                .split_once('-')
                .map(|(_, q)| q.to_string())
                .filter(|q| !q.is_empty()),
        };

        Release { raw, qualifier }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }

    pub fn is_prerelease(&self) -> bool {
        self.qualifier.is_some()
    }

    /// Short display version, see [`release_to_version`].
    pub fn version(&self, policy: TruncationPolicy) -> Result<String> {
        release_to_version(&self.raw, policy)
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

//! Link shortcuts such as ``:issue:`36` ``.
//!
//! Each shortcut maps a role name to a URL pattern containing `%s` and a
//! caption prefix, e.g. `issue` -> (`https://github.com/.../issues/%s`, `issue #`).

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::error::{DocsReleaseError, Result};

const PLACEHOLDER: &str = "%s";

/// Matches ``:role:`target` ``.
fn role_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r":([A-Za-z][A-Za-z0-9_-]*):`([^`]+)`").expect("valid role pattern")
    })
}

/// A single link shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtLink {
    pub url: String,
    #[serde(default)]
    pub prefix: String,
}

impl ExtLink {
    pub fn new(url: impl Into<String>, prefix: impl Into<String>) -> Self {
        ExtLink {
            url: url.into(),
            prefix: prefix.into(),
        }
    }
}

/// A link shortcut applied to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    pub url: String,
    pub caption: String,
}

/// Table of link shortcuts keyed by role name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ExtLinks(BTreeMap<String, ExtLink>);

impl ExtLinks {
    pub fn insert(&mut self, role: impl Into<String>, link: ExtLink) {
        self.0.insert(role.into(), link);
    }

    pub fn get(&self, role: &str) -> Option<&ExtLink> {
        self.0.get(role)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ExtLink)> {
        self.0.iter()
    }

    /// Configured role names, sorted.
    pub fn roles(&self) -> Vec<&str> {
        self.iter().map(|(role, _)| role.as_str()).collect()
    }

    /// Expands `role` applied to `target` into a URL and caption.
    ///
    /// # Returns
    /// * `Ok(ResolvedLink)` - `%s` in the URL replaced by `target`, caption `prefix + target`
    /// * `Err(UnknownRole)` - If the role is not configured
    /// * `Err(Config)` - If the URL pattern has no `%s` placeholder
    ///
    /// # Example
    /// ```ignore
    /// let link = links.expand("issue", "36")?;
    /// assert_eq!(link.caption, "issue #36");
    /// ```
    pub fn expand(&self, role: &str, target: &str) -> Result<ResolvedLink> {
        let link = self
            .get(role)
            .ok_or_else(|| DocsReleaseError::unknown_role(role))?;

        if !link.url.contains(PLACEHOLDER) {
            return Err(DocsReleaseError::config(format!(
                "Link pattern for role '{}' has no {} placeholder: {}",
                role, PLACEHOLDER, link.url
            )));
        }

        Ok(ResolvedLink {
            url: link.url.replace(PLACEHOLDER, target),
            caption: format!("{}{}", link.prefix, target),
        })
    }

    /// Rewrites every known ``:role:`target` `` in `text` as `caption <url>`.
    ///
    /// Unknown roles are left as written.
    pub fn expand_text(&self, text: &str) -> Result<String> {
        let mut failure = None;
        let expanded = role_pattern().replace_all(text, |caps: &Captures| {
            let role = &caps[1];
            let target = &caps[2];
            match self.expand(role, target) {
                Ok(link) => format!("{} <{}>", link.caption, link.url),
                Err(DocsReleaseError::UnknownRole(_)) => caps[0].to_string(),
                Err(e) => {
                    failure.get_or_insert(e);
                    caps[0].to_string()
                }
            }
        });

        match failure {
            Some(e) => Err(e),
            None => Ok(expanded.into_owned()),
        }
    }
}

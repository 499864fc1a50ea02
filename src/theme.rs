//! Theme capability detection.
//!
//! The preferred theme lives in an optional checkout (usually a git
//! submodule). [`detect_theme`] probes the theme search path and reports
//! whether it can be used; [`ThemeSelection`] turns that answer into the
//! settings actually handed to the documentation tool.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::ThemeConfig;
use crate::warning::BuildWarning;

/// File every theme directory must contain.
const THEME_MANIFEST: &str = "theme.conf";

/// An installed theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    /// Directory holding the theme, e.g. `_themes/flask`.
    pub dir: PathBuf,
}

/// Outcome of probing for the preferred theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeAvailability {
    Available(Theme),
    Unavailable { reason: String },
}

impl ThemeAvailability {
    pub fn is_available(&self) -> bool {
        matches!(self, ThemeAvailability::Available(_))
    }
}

/// Probes each theme search directory for the configured theme.
///
/// A theme counts as available when `<dir>/<name>/theme.conf` and the
/// support module `<dir>/<support_module>.py` both exist under the same
/// search directory. Relative search directories are resolved against `base_dir`.
pub fn detect_theme(config: &ThemeConfig, base_dir: &Path) -> ThemeAvailability {
    if config.path.is_empty() {
        return ThemeAvailability::Unavailable {
            reason: "no theme search path configured".to_string(),
        };
    }

    let mut missing = Vec::new();
    for search_dir in &config.path {
        let root = base_dir.join(search_dir);
        let theme_dir = root.join(&config.name);
        let manifest = theme_dir.join(THEME_MANIFEST);
        let support = root.join(format!("{}.py", config.support_module));

        match (manifest.is_file(), support.is_file()) {
            (true, true) => {
                return ThemeAvailability::Available(Theme {
                    name: config.name.clone(),
                    dir: theme_dir,
                });
            }
            (false, _) => missing.push(format!(
                "{} not found",
                search_dir.join(&config.name).join(THEME_MANIFEST).display()
            )),
            (true, false) => missing.push(format!(
                "{} not found",
                search_dir
                    .join(format!("{}.py", config.support_module))
                    .display()
            )),
        }
    }

    ThemeAvailability::Unavailable {
        reason: missing.join(", "),
    }
}

/// Effective theme settings after fallback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeSelection {
    pub name: String,
    pub pygments_style: String,
    pub fallback: bool,
    pub theme_path: Vec<PathBuf>,
    pub options: toml::Table,
    pub sidebars: BTreeMap<String, Vec<String>>,
}

impl ThemeSelection {
    /// Picks the configured theme when available, otherwise the fallback
    /// theme with no options and the fallback highlighting style.
    ///
    /// # Returns
    /// The selection plus a warning when the fallback was taken.
    pub fn from_availability(
        config: &ThemeConfig,
        availability: &ThemeAvailability,
    ) -> (Self, Option<BuildWarning>) {
        match availability {
            ThemeAvailability::Available(theme) => (
                ThemeSelection {
                    name: theme.name.clone(),
                    options: config.options.clone(),
                    pygments_style: config.pygments_style.clone(),
                    sidebars: config.sidebars.clone(),
                    theme_path: config.path.clone(),
                    fallback: false,
                },
                None,
            ),
            ThemeAvailability::Unavailable { reason } => (
                ThemeSelection {
                    name: config.fallback_name.clone(),
                    options: toml::Table::new(),
                    pygments_style: config.fallback_pygments_style.clone(),
                    sidebars: config.sidebars.clone(),
                    theme_path: config.path.clone(),
                    fallback: true,
                },
                Some(BuildWarning::ThemeUnavailable {
                    theme: config.name.clone(),
                    fallback: config.fallback_name.clone(),
                    reason: reason.clone(),
                }),
            ),
        }
    }
}

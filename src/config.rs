use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::extlinks::{ExtLink, ExtLinks};
use crate::release::{TruncationPolicy, DEFAULT_RELEASE_KEY};

/// File name looked up in the working directory and the user config directory.
pub const CONFIG_FILE_NAME: &str = "docs-release.toml";

/// Represents the complete documentation build configuration.
///
/// Holds the static settings handed to the documentation tool, where to find
/// the release, which theme to prefer and the link shortcut table.
/// Constructed once and never mutated.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct DocsConfig {
    pub project: String,
    pub copyright: String,
    pub html_short_title: String,
    pub htmlhelp_basename: String,
    pub master_doc: String,
    pub source_suffix: String,
    pub templates_path: Vec<String>,
    pub exclude_patterns: Vec<String>,
    pub extensions: Vec<String>,
    pub highlight_language: String,
    pub html_use_smartypants: bool,
    pub html_show_sphinx: bool,
    pub rst_epilog: String,
    pub release: ReleaseConfig,
    pub theme: ThemeConfig,
    pub extlinks: ExtLinks,
}

impl Default for DocsConfig {
    fn default() -> Self {
        DocsConfig {
            project: "Twitter-Server".to_string(),
            copyright: "2013 Twitter, Inc".to_string(),
            html_short_title: "Twitter-server".to_string(),
            htmlhelp_basename: "twitter-server".to_string(),
            master_doc: "index".to_string(),
            source_suffix: ".rst".to_string(),
            templates_path: vec!["_templates".to_string()],
            exclude_patterns: Vec::new(),
            extensions: vec!["sphinx.ext.extlinks".to_string(), "includecode".to_string()],
            // plain text keeps code samples free of syntax coloring
            highlight_language: "text".to_string(),
            html_use_smartypants: true,
            html_show_sphinx: false,
            rst_epilog: ".. include:: /links.txt\n".to_string(),
            release: ReleaseConfig::default(),
            theme: ThemeConfig::default(),
            extlinks: default_extlinks(),
        }
    }
}

impl DocsConfig {
    /// Resolves the build descriptor path against the documentation source directory.
    pub fn descriptor_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.release.descriptor)
    }
}

fn default_extlinks() -> ExtLinks {
    let mut links = ExtLinks::default();
    links.insert(
        "issue",
        ExtLink::new(
            "https://github.com/twitter/twitter-server/issues/%s",
            "issue #",
        ),
    );
    links
}

fn default_descriptor() -> PathBuf {
    PathBuf::from("../../../project/Build.scala")
}

fn default_release_key() -> String {
    DEFAULT_RELEASE_KEY.to_string()
}

/// Where the release string comes from and how it is shortened.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    /// Build descriptor path, relative to the documentation source directory.
    #[serde(default = "default_descriptor")]
    pub descriptor: PathBuf,

    #[serde(default = "default_release_key")]
    pub key: String,

    #[serde(default)]
    pub policy: TruncationPolicy,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            descriptor: default_descriptor(),
            key: default_release_key(),
            policy: TruncationPolicy::default(),
        }
    }
}

fn default_theme_name() -> String {
    "flask".to_string()
}

fn default_theme_path() -> Vec<PathBuf> {
    vec![PathBuf::from("_themes")]
}

fn default_support_module() -> String {
    "flask_theme_support".to_string()
}

fn default_pygments_style() -> String {
    "flask_theme_support.FlaskyStyle".to_string()
}

fn default_fallback_name() -> String {
    "default".to_string()
}

fn default_fallback_pygments_style() -> String {
    "tango".to_string()
}

fn default_theme_options() -> toml::Table {
    let mut options = toml::Table::new();
    options.insert("index_logo".to_string(), toml::Value::String(String::new()));
    options
}

fn to_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_sidebars() -> BTreeMap<String, Vec<String>> {
    let mut sidebars = BTreeMap::new();
    sidebars.insert(
        "index".to_string(),
        to_vec(&["sidebarintro.html", "searchbox.html"]),
    );
    sidebars.insert(
        "**".to_string(),
        to_vec(&[
            "sidebarintro.html",
            "localtoc.html",
            "relations.html",
            "searchbox.html",
        ]),
    );
    sidebars
}

/// Preferred theme and what to fall back to when it is not installed.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ThemeConfig {
    #[serde(default = "default_theme_name")]
    pub name: String,

    /// Theme search directories, relative to the documentation source directory.
    #[serde(default = "default_theme_path")]
    pub path: Vec<PathBuf>,

    /// Module shipped next to the theme that provides its highlighting style.
    #[serde(default = "default_support_module")]
    pub support_module: String,

    #[serde(default = "default_pygments_style")]
    pub pygments_style: String,

    #[serde(default = "default_fallback_name")]
    pub fallback_name: String,

    #[serde(default = "default_fallback_pygments_style")]
    pub fallback_pygments_style: String,

    #[serde(default = "default_theme_options")]
    pub options: toml::Table,

    #[serde(default = "default_sidebars")]
    pub sidebars: BTreeMap<String, Vec<String>>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            name: default_theme_name(),
            path: default_theme_path(),
            support_module: default_support_module(),
            pygments_style: default_pygments_style(),
            fallback_name: default_fallback_name(),
            fallback_pygments_style: default_fallback_pygments_style(),
            options: default_theme_options(),
            sidebars: default_sidebars(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `docs-release.toml` in current directory
/// 3. `docs-release.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(DocsConfig)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<DocsConfig> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);

    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if local.exists() {
        fs::read_to_string(local)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(DocsConfig::default());
        }
    } else {
        return Ok(DocsConfig::default());
    };

    let config: DocsConfig = toml::from_str(&config_str)?;
    Ok(config)
}

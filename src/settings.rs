//! Settings resolved once per documentation build.

use std::path::Path;

use serde::Serialize;

use crate::config::DocsConfig;
use crate::error::Result;
use crate::extlinks::ExtLinks;
use crate::release::{find_release_with_key, Release};
use crate::theme::{detect_theme, ThemeSelection};
use crate::warning::BuildWarning;

/// Everything the documentation tool needs, with release, version and theme
/// already worked out.
///
/// Built by [`ResolvedDocs::resolve`] and not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedDocs {
    pub project: String,
    pub copyright: String,
    pub release: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerelease: Option<String>,
    pub html_short_title: String,
    pub htmlhelp_basename: String,
    pub master_doc: String,
    pub source_suffix: String,
    pub highlight_language: String,
    pub html_use_smartypants: bool,
    pub html_show_sphinx: bool,
    pub rst_epilog: String,
    pub templates_path: Vec<String>,
    pub exclude_patterns: Vec<String>,
    pub extensions: Vec<String>,
    pub theme: ThemeSelection,
    pub extlinks: ExtLinks,
    #[serde(skip)]
    pub warnings: Vec<BuildWarning>,
}

impl ResolvedDocs {
    /// Resolves release, version and theme for the docs rooted at `base_dir`.
    ///
    /// `base_dir` is the documentation source directory; the build descriptor
    /// and theme search path are relative to it.
    ///
    /// # Returns
    /// * `Ok(ResolvedDocs)` - Resolved settings, with any non-fatal warnings
    /// * `Err` - If the release cannot be found or shortened
    pub fn resolve(config: &DocsConfig, base_dir: &Path) -> Result<Self> {
        let descriptor = config.descriptor_path(base_dir);
        let raw = find_release_with_key(&descriptor, &config.release.key)?;
        let release = Release::parse(&raw);
        let version = release.version(config.release.policy)?;

        let mut warnings = Vec::new();
        if let Some(qualifier) = release.qualifier() {
            warnings.push(BuildWarning::PrereleaseRelease {
                release: release.to_string(),
                qualifier: qualifier.to_string(),
            });
        }

        let availability = detect_theme(&config.theme, base_dir);
        let (theme, theme_warning) =
            ThemeSelection::from_availability(&config.theme, &availability);
        warnings.extend(theme_warning);

        Ok(ResolvedDocs {
            project: config.project.clone(),
            copyright: config.copyright.clone(),
            release: release.to_string(),
            version,
            prerelease: release.qualifier().map(str::to_string),
            html_short_title: config.html_short_title.clone(),
            htmlhelp_basename: config.htmlhelp_basename.clone(),
            master_doc: config.master_doc.clone(),
            source_suffix: config.source_suffix.clone(),
            highlight_language: config.highlight_language.clone(),
            html_use_smartypants: config.html_use_smartypants,
            html_show_sphinx: config.html_show_sphinx,
            rst_epilog: config.rst_epilog.clone(),
            templates_path: config.templates_path.clone(),
            exclude_patterns: config.exclude_patterns.clone(),
            extensions: config.extensions.clone(),
            theme,
            extlinks: config.extlinks.clone(),
            warnings,
        })
    }

    /// Serializes the resolved settings as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

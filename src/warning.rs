use std::fmt;

/// Non-fatal issues found while resolving the documentation settings.
/// The build continues, but these should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildWarning {
    /// Preferred theme is missing, the fallback theme is used instead
    ThemeUnavailable {
        theme: String,
        fallback: String,
        reason: String,
    },
    /// Release carries a pre-release qualifier
    PrereleaseRelease { release: String, qualifier: String },
}

impl BuildWarning {
    /// Follow-up command or advice shown under the warning, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            BuildWarning::ThemeUnavailable { .. } => Some("git submodule update --init"),
            BuildWarning::PrereleaseRelease { .. } => None,
        }
    }
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildWarning::ThemeUnavailable {
                theme,
                fallback,
                reason,
            } => {
                write!(
                    f,
                    "Theme '{}' unavailable ({}). Building with '{}' theme",
                    theme, reason, fallback
                )
            }
            BuildWarning::PrereleaseRelease { release, qualifier } => {
                write!(
                    f,
                    "Release '{}' is a pre-release ({})",
                    release, qualifier
                )
            }
        }
    }
}

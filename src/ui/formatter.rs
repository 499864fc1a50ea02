//! Pure formatting functions for UI output.
//!
//! Status lines go to stdout, warnings and errors to stderr, so that
//! `--release` / `--short-version` output stays scriptable.

use console::style;

use crate::settings::ResolvedDocs;
use crate::warning::BuildWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a build warning, followed by its hint when it has one.
pub fn display_build_warning(warning: &BuildWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
    if let Some(hint) = warning.hint() {
        eprintln!("  If you want it, run this command and build again:");
        eprintln!("    {}", style(hint).cyan());
    }
}

/// Lines of the human-readable summary, without styling.
pub fn summary_lines(docs: &ResolvedDocs) -> Vec<(&'static str, String)> {
    let theme = if docs.theme.fallback {
        format!("{} (fallback)", docs.theme.name)
    } else {
        docs.theme.name.clone()
    };

    let mut lines = vec![
        ("Project", docs.project.clone()),
        ("Release", docs.release.clone()),
        ("Version", docs.version.clone()),
    ];
    if let Some(qualifier) = &docs.prerelease {
        lines.push(("Pre-release", qualifier.clone()));
    }
    lines.push(("Theme", theme));
    lines.push(("Highlighting", docs.theme.pygments_style.clone()));
    if !docs.extlinks.is_empty() {
        lines.push(("Link roles", docs.extlinks.roles().join(", ")));
    }
    lines
}

/// Display the resolved documentation settings.
pub fn display_summary(docs: &ResolvedDocs) {
    println!("\n{}", style("Documentation build settings:").bold());
    for (label, value) in summary_lines(docs) {
        println!("  {:<13} {}", format!("{}:", label), style(value).green());
    }
}

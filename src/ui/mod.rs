//! User interface module.
//!
//! Only formatting lives here; the tool never prompts.

pub mod formatter;

pub use formatter::{
    display_build_warning, display_error, display_status, display_success, display_summary,
    summary_lines,
};

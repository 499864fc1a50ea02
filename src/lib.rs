pub mod config;
pub mod error;
pub mod extlinks;
pub mod release;
pub mod settings;
pub mod theme;
pub mod ui;
pub mod warning;

pub use error::{DocsReleaseError, Result};
pub use release::{find_release, release_to_version, Release, TruncationPolicy};
pub use settings::ResolvedDocs;

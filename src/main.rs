use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use docs_release::config::{self, DocsConfig};
use docs_release::{ui, ResolvedDocs, TruncationPolicy};

#[derive(clap::Parser)]
#[command(
    name = "docs-release",
    about = "Resolve release, version and theme settings for a documentation build"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(
        short,
        long,
        default_value = ".",
        help = "Documentation source directory"
    )]
    docs_dir: PathBuf,

    #[arg(long, help = "Build descriptor to read the release from")]
    descriptor: Option<PathBuf>,

    #[arg(long, help = "Key declaring the release in the build descriptor")]
    key: Option<String>,

    #[arg(long, help = "Reject releases without a minor segment")]
    strict: bool,

    #[arg(long, group = "output", help = "Print only the release")]
    release: bool,

    #[arg(long, group = "output", help = "Print only the short version")]
    short_version: bool,

    #[arg(long, group = "output", help = "Print resolved settings as TOML")]
    toml: bool,

    #[arg(short, long, help = "Suppress status and warnings")]
    quiet: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    if args.version {
        println!("docs-release {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = apply_overrides(
        config::load_config(args.config.as_deref()).context("Error loading config")?,
        &args,
    )?;

    let descriptor = config.descriptor_path(&args.docs_dir);
    let docs = ResolvedDocs::resolve(&config, &args.docs_dir).with_context(|| {
        format!(
            "Failed to resolve release from {}",
            descriptor.display()
        )
    })?;

    if args.release {
        println!("{}", docs.release);
        return Ok(());
    }
    if args.short_version {
        println!("{}", docs.version);
        return Ok(());
    }

    if !args.quiet {
        for warning in &docs.warnings {
            ui::display_build_warning(warning);
        }
    }

    if args.toml {
        print!("{}", docs.to_toml()?);
        return Ok(());
    }

    if !args.quiet {
        ui::display_status(&format!("Read release from {}", descriptor.display()));
        ui::display_success(&format!(
            "Release {} shortened to version {}",
            docs.release, docs.version
        ));
    }
    ui::display_summary(&docs);
    Ok(())
}

/// Applies command-line overrides on top of the loaded configuration.
fn apply_overrides(mut config: DocsConfig, args: &Args) -> Result<DocsConfig> {
    if let Some(descriptor) = &args.descriptor {
        // given on the command line, so relative to the working directory
        config.release.descriptor = if descriptor.is_absolute() {
            descriptor.clone()
        } else {
            std::env::current_dir()?.join(descriptor)
        };
    }
    if let Some(key) = &args.key {
        config.release.key = key.clone();
    }
    if args.strict {
        config.release.policy = TruncationPolicy::Reject;
    }
    Ok(config)
}

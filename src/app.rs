// Declare modules
pub mod acquire;
pub mod archive;
pub mod cli;
pub mod config;
pub mod formatter;
pub mod models;
pub mod pattern;
pub mod walker;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::Path;

use self::acquire::{repo_name, Acquisition};
use self::cli::Cli;
use self::config::resolve_config;
use self::formatter::OutputGenerator;
use self::models::RuntimeConfig;
use self::walker::Mirror;

/// Parses arguments and runs the whole copy.
pub fn run() -> Result<()> {
    let args = Cli::parse();
    let name = repo_name(&args.git_repo);
    let config = resolve_config(args, &name)?;

    execute(&config, &name, Acquisition::detect())
}

/// Fetches the repository into a scratch directory and mirrors its folders.
pub fn execute(config: &RuntimeConfig, name: &str, acquisition: Acquisition) -> Result<()> {
    execute_in(config, name, acquisition, &std::env::temp_dir())
}

/// Same as [`execute`], with scratch files created under `scratch_root`.
///
/// The scratch directory (and any downloaded archive) is deleted when this
/// returns, whether it succeeded or not.
pub fn execute_in(
    config: &RuntimeConfig,
    name: &str,
    acquisition: Acquisition,
    scratch_root: &Path,
) -> Result<()> {
    let scratch = tempfile::Builder::new()
        .prefix("repo-skeleton-")
        .tempdir_in(scratch_root)
        .context("Failed to create temp directory")?;

    log::info!("📥 Downloading repository: {}", config.repo_url);
    let repo_dir = scratch.path().join("repo");
    acquisition
        .fetch(&config.repo_url, &repo_dir, scratch_root)
        .context("Failed to download repository")?;

    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    log::info!(
        "📂 Copying folder structure to: {}",
        config.output_dir.display()
    );
    let created = Mirror::new(config)
        .walk(&repo_dir, &config.output_dir, 0)
        .context("Failed to copy folder structure")?;

    if config.print_tree {
        println!("{}", OutputGenerator::generate_tree(&created));
    }

    log::info!(
        "✅ {}",
        OutputGenerator::format_summary(name, &config.output_dir, &created)
    );

    Ok(())
}

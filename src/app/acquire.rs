//! Getting a local copy of the repository to mirror.

use crate::app::archive::extract_directories;
use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;

/// How the repository tree is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acquisition {
    /// `git clone --depth 1`
    GitClone,
    /// Default-branch zip archive over HTTP, directories only.
    HttpArchive,
}

impl Acquisition {
    /// Prefers git when the binary is on the PATH.
    pub fn detect() -> Self {
        if is_git_installed() {
            Acquisition::GitClone
        } else {
            Acquisition::HttpArchive
        }
    }

    /// Populates `dest`; any temporary download is created under `scratch`.
    pub fn fetch(self, repo_url: &str, dest: &Path, scratch: &Path) -> Result<()> {
        match self {
            Acquisition::GitClone => {
                log::info!("Using git clone...");
                clone_repo(repo_url, dest)
            }
            Acquisition::HttpArchive => {
                log::info!("Git not found, using HTTP download...");
                download_archive(repo_url, dest, scratch)
            }
        }
    }
}

fn is_git_installed() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// `--` keeps a locator starting with `-` from being read as a git option.
fn clone_command(repo_url: &str, dest: &Path) -> Command {
    let mut command = Command::new("git");
    command
        .args(["clone", "--depth", "1", "--", repo_url])
        .arg(dest);
    command
}

fn clone_repo(repo_url: &str, dest: &Path) -> Result<()> {
    let status = clone_command(repo_url, dest)
        .status()
        .context("Failed to invoke git clone")?;

    if !status.success() {
        bail!("git clone of {} failed ({})", repo_url, status);
    }
    Ok(())
}

fn download_archive(repo_url: &str, dest: &Path, scratch: &Path) -> Result<()> {
    let zip_url = archive_url(repo_url);
    log::info!("Downloading ZIP from: {}", zip_url);

    let mut response = reqwest::blocking::get(&zip_url)
        .with_context(|| format!("Failed to download repository from {}", zip_url))?;

    if !response.status().is_success() {
        bail!(
            "Failed to download repository: HTTP {} from {}",
            response.status(),
            zip_url
        );
    }

    // Removed when dropped, on every path out of this function.
    let mut archive = tempfile::Builder::new()
        .prefix("repo-")
        .suffix(".zip")
        .tempfile_in(scratch)
        .context("Failed to create temp ZIP file")?;

    response
        .copy_to(archive.as_file_mut())
        .with_context(|| format!("Failed to save ZIP file from {}", zip_url))?;

    let created = extract_directories(archive.path(), dest)?;
    log::debug!("Extracted {} directories from archive", created);
    Ok(())
}

/// Derives the default-branch (`main`) archive URL for a repository.
///
/// GitHub, GitLab and Bitbucket have their own URL shapes; any other host
/// gets the GitHub one.
pub fn archive_url(repo_url: &str) -> String {
    let clean = repo_url.strip_suffix(".git").unwrap_or(repo_url);

    if clean.contains("gitlab.com") {
        format!("{}/-/archive/main/archive.zip", clean)
    } else if clean.contains("bitbucket.org") {
        format!("{}/get/main.zip", clean)
    } else {
        format!("{}/archive/refs/heads/main.zip", clean)
    }
}

/// Last path segment of the locator without `.git`.
pub fn repo_name(repo_url: &str) -> String {
    let last = repo_url.rsplit('/').next().unwrap_or(repo_url);
    let name = last.strip_suffix(".git").unwrap_or(last);
    if name.is_empty() {
        "repo".to_string()
    } else {
        name.to_string()
    }
}

//! Directory-only extraction of hosting-provider zip archives.
//!
//! Archive endpoints wrap the repository in one top-level folder
//! (`repo-main/...`). That folder is taken to be the first directory entry
//! with exactly one `/` in its name. Archives that don't follow this
//! convention are extracted with no prefix stripped.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Component, Path};
use zip::ZipArchive;

/// Recreates the directory entries of `archive_path` under `dest`.
///
/// File entries are never materialised. Returns the number of directories
/// created.
pub fn extract_directories(archive_path: &Path, dest: &Path) -> Result<usize> {
    let file = File::open(archive_path)
        .with_context(|| format!("Failed to open ZIP file {}", archive_path.display()))?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("Failed to read ZIP file {}", archive_path.display()))?;

    fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create directory {}", dest.display()))?;

    let root = find_synthetic_root(&mut archive)?.unwrap_or_else(|| {
        log::warn!(
            "⚠️ No top-level folder found in {}; extracting entries as-is",
            archive_path.display()
        );
        String::new()
    });

    let mut created = 0;
    for i in 0..archive.len() {
        let entry = archive
            .by_index_raw(i)
            .with_context(|| format!("Failed to read zip entry {}", i))?;

        let Some(relative) = entry.name().strip_prefix(root.as_str()) else {
            continue;
        };
        if relative.is_empty() || !entry.is_dir() {
            continue;
        }

        let relative = Path::new(relative);
        if !relative.components().all(|c| matches!(c, Component::Normal(_))) {
            log::warn!("⚠️ Skipping unsafe archive entry: {}", entry.name());
            continue;
        }

        let target = dest.join(relative);
        fs::create_dir_all(&target)
            .with_context(|| format!("Failed to create directory {}", target.display()))?;
        log::debug!("Extracted directory: {}", target.display());
        created += 1;
    }

    Ok(created)
}

fn find_synthetic_root<R: std::io::Read + std::io::Seek>(
    archive: &mut ZipArchive<R>,
) -> Result<Option<String>> {
    for i in 0..archive.len() {
        let entry = archive
            .by_index_raw(i)
            .with_context(|| format!("Failed to read zip entry {}", i))?;
        if entry.is_dir() && entry.name().matches('/').count() == 1 {
            return Ok(Some(entry.name().to_string()));
        }
    }
    Ok(None)
}

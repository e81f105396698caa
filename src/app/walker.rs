use crate::app::models::{MirroredDir, RuntimeConfig};
use crate::app::pattern::IgnoreSet;
use anyhow::{Context, Result};
use ignore::{DirEntry, WalkBuilder};
use pathdiff::diff_paths;
use std::fs;
use std::path::Path;

/// Git's metadata directory. Always skipped, whatever the ignore patterns say.
pub const VCS_METADATA_DIR: &str = ".git";

/// Copies the directory hierarchy of a source tree into a destination.
pub struct Mirror {
    ignore: IgnoreSet,
    max_depth: Option<usize>,
}

impl Mirror {
    pub fn new(config: &RuntimeConfig) -> Self {
        Self::with_patterns(&config.ignore_patterns, config.max_depth)
    }

    pub fn with_patterns(patterns: &[String], max_depth: Option<usize>) -> Self {
        let ignore = IgnoreSet::new(patterns);
        ignore.warn_rejected();
        Self { ignore, max_depth }
    }

    /// Mirrors the directories below `src` into `dest`.
    ///
    /// Children of `src` are created at `current_depth`; nothing is created
    /// once that exceeds the configured maximum. Ignored directories are
    /// neither created nor descended into. The first listing or creation
    /// failure aborts the walk and whatever was already created stays on disk.
    pub fn walk(&self, src: &Path, dest: &Path, current_depth: usize) -> Result<Vec<MirroredDir>> {
        // Number of levels below `src` the walker may still visit.
        let levels = match self.max_depth {
            Some(max) if current_depth > max => return Ok(Vec::new()),
            Some(max) => Some(max.saturating_sub(current_depth).saturating_add(1)),
            None => None,
        };

        let ignore = self.ignore.clone();
        let walker = WalkBuilder::new(src)
            .standard_filters(false)
            .follow_links(false)
            .max_depth(levels)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| keep_entry(entry, &ignore))
            .build();

        let mut created = Vec::new();
        for result in walker {
            let entry = result
                .with_context(|| format!("Failed to list directory under {}", src.display()))?;

            // The root itself; the filter never sees it.
            if entry.depth() == 0 {
                continue;
            }

            let relative = diff_paths(entry.path(), src).with_context(|| {
                format!(
                    "{} is not inside {}",
                    entry.path().display(),
                    src.display()
                )
            })?;
            let target = dest.join(&relative);

            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create directory {}", target.display()))?;
            log::info!("📁 Created directory: {}", target.display());

            created.push(MirroredDir {
                path: target,
                relative_path: relative.to_string_lossy().replace('\\', "/"),
                depth: current_depth + entry.depth() - 1,
            });
        }

        Ok(created)
    }
}

/// Decides whether the walker yields and descends into `entry`.
fn keep_entry(entry: &DirEntry, ignore: &IgnoreSet) -> bool {
    if !entry.file_type().is_some_and(|t| t.is_dir()) {
        return false;
    }

    let name = entry.file_name().to_string_lossy();
    if name == VCS_METADATA_DIR {
        return false;
    }

    if ignore.is_match(&name) {
        log::info!("🚫 Ignoring directory: {}", name);
        return false;
    }

    true
}

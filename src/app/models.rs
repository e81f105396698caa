use std::path::PathBuf;

/// Represents the final configuration after merging presets, the ignore file and CLI args.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub repo_url: String,
    pub ignore_patterns: Vec<String>,
    /// `None` means unbounded.
    pub max_depth: Option<usize>,
    pub output_dir: PathBuf,
    pub print_tree: bool,
}

/// A directory created in the destination tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirroredDir {
    pub path: PathBuf,
    pub relative_path: String,
    /// Recursion depth it was created at (0 = immediate child of the root).
    pub depth: usize,
}

/// Negative depths mean "no limit".
pub fn depth_limit(raw: i64) -> Option<usize> {
    usize::try_from(raw).ok()
}

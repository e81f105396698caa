use crate::app::models::MirroredDir;
use std::path::Path;

pub struct OutputGenerator;

impl OutputGenerator {
    pub fn generate_tree(entries: &[MirroredDir]) -> String {
        let mut sorted: Vec<&MirroredDir> = entries.iter().collect();
        sorted.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

        let mut output = String::new();
        for entry in sorted {
            let indent = "    ".repeat(entry.depth);
            let name = entry.path.file_name().unwrap_or_default().to_string_lossy();
            output.push_str(&format!("{}{}/\n", indent, name));
        }

        output.trim_end().to_string()
    }

    pub fn format_summary(repo_name: &str, output_dir: &Path, entries: &[MirroredDir]) -> String {
        format!(
            "Copied folder structure of {} to {} ({} directories)",
            repo_name,
            output_dir.display(),
            entries.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn dir(relative: &str) -> MirroredDir {
        MirroredDir {
            path: PathBuf::from("out").join(relative),
            relative_path: relative.to_string(),
            depth: relative.matches('/').count(),
        }
    }

    #[test]
    fn renders_indented_tree() {
        let entries = vec![dir("src/app"), dir("docs"), dir("src")];
        assert_eq!(
            OutputGenerator::generate_tree(&entries),
            "docs/\nsrc/\n    app/"
        );
    }

    #[test]
    fn indent_follows_recorded_depth() {
        // A walk started below the root records deeper depths.
        let entry = MirroredDir {
            path: PathBuf::from("out/lib"),
            relative_path: "lib".to_string(),
            depth: 2,
        };
        assert_eq!(OutputGenerator::generate_tree(&[entry]), "        lib/");
    }

    #[test]
    fn empty_tree_is_empty_string() {
        assert_eq!(OutputGenerator::generate_tree(&[]), "");
    }

    #[test]
    fn summary_counts_directories() {
        let summary =
            OutputGenerator::format_summary("repo", Path::new("out"), &[dir("a"), dir("b")]);
        assert_eq!(summary, "Copied folder structure of repo to out (2 directories)");
    }
}

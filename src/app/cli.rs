use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Replicate the directory skeleton of a git repository (no files are copied)",
    after_help = "Example:\n  repo_skeleton -g https://github.com/user/repo -i ignore.txt -d 3 -o ./output"
)]
pub struct Cli {
    /// Git repository URL
    #[arg(short = 'g', long = "git-repo")]
    pub git_repo: String,

    /// Ignore file with patterns (one pattern per line)
    #[arg(short = 'i', long)]
    pub ignore_file: Option<PathBuf>,

    /// Extra ignore patterns for directory names (e.g., 'node_modules' 'build*')
    #[arg(short = 'p', long = "pattern", num_args = 1..)]
    pub patterns: Option<Vec<String>>,

    /// Maximum depth of folders to copy (negative for unlimited)
    #[arg(short = 'd', long, allow_negative_numbers = true)]
    pub depth: Option<i64>,

    /// Output directory
    #[arg(short = 'o', long, default_value = ".")]
    pub output: PathBuf,

    /// Use a predefined set of options from presets.toml
    #[arg(long)]
    pub preset: Option<String>,

    /// Print the copied directory tree when done
    #[arg(long)]
    pub tree: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_flags() {
        let cli = Cli::try_parse_from([
            "repo_skeleton",
            "-g",
            "https://github.com/user/repo",
            "-i",
            "ignore.txt",
            "-d",
            "3",
            "-o",
            "./output",
        ])
        .unwrap();

        assert_eq!(cli.git_repo, "https://github.com/user/repo");
        assert_eq!(cli.ignore_file, Some(PathBuf::from("ignore.txt")));
        assert_eq!(cli.depth, Some(3));
        assert_eq!(cli.output, PathBuf::from("./output"));
        assert!(!cli.tree);
    }

    #[test]
    fn accepts_negative_depth() {
        let cli = Cli::try_parse_from(["repo_skeleton", "-g", "url", "-d", "-1"]).unwrap();
        assert_eq!(cli.depth, Some(-1));
    }

    #[test]
    fn output_defaults_to_current_dir() {
        let cli = Cli::try_parse_from(["repo_skeleton", "-g", "url"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("."));
        assert_eq!(cli.depth, None);
        assert!(cli.patterns.is_none());
    }

    #[test]
    fn repository_is_required() {
        let err = Cli::try_parse_from(["repo_skeleton", "-o", "out"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn collects_inline_patterns() {
        let cli = Cli::try_parse_from([
            "repo_skeleton",
            "-g",
            "url",
            "--pattern",
            "node_modules",
            "build*",
        ])
        .unwrap();
        assert_eq!(
            cli.patterns,
            Some(vec!["node_modules".to_string(), "build*".to_string()])
        );
    }
}

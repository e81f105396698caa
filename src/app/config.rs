use crate::app::cli::Cli;
use crate::app::models::{depth_limit, RuntimeConfig};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Deserialize, Debug)]
struct PresetsFile {
    #[serde(flatten)]
    presets: HashMap<String, PresetConfig>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PresetConfig {
    pub ignore: Option<Vec<String>>,
    pub depth: Option<i64>,
}

fn load_presets_file() -> Result<HashMap<String, PresetConfig>> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let config_path = home
        .join(".config")
        .join("repo_skeleton")
        .join("presets.toml");

    if !config_path.exists() {
        return Ok(HashMap::new());
    }

    let content = fs::read_to_string(&config_path)
        .context(format!("Failed to read config at {:?}", config_path))?;

    parse_presets(&content)
}

fn parse_presets(content: &str) -> Result<HashMap<String, PresetConfig>> {
    let parsed: PresetsFile = toml::from_str(content).context("Failed to parse presets.toml")?;
    Ok(parsed.presets)
}

/// Reads one glob per line, skipping blank lines and `#` comments.
pub fn load_ignore_patterns(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read ignore file {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}

fn merge_vecs(sources: Vec<Vec<String>>) -> Vec<String> {
    let mut combined: Vec<String> = sources.into_iter().flatten().collect();
    // Deduplicate while keeping order
    let mut seen = std::collections::HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    combined
}

pub fn resolve_config(cli: Cli, repo_name: &str) -> Result<RuntimeConfig> {
    let presets = load_presets_file()?;
    resolve_with_presets(cli, repo_name, &presets)
}

/// Preset selection: `--preset` flag > repository name > none.
pub fn resolve_with_presets(
    cli: Cli,
    repo_name: &str,
    presets: &HashMap<String, PresetConfig>,
) -> Result<RuntimeConfig> {
    let preset_key = cli.preset.as_deref().unwrap_or(repo_name);
    let preset = presets.get(preset_key).cloned().unwrap_or_default();
    if cli.preset.is_some() && !presets.contains_key(preset_key) {
        log::warn!("⚠️ Preset '{}' not found in presets.toml", preset_key);
    }

    let file_patterns = match &cli.ignore_file {
        Some(path) => load_ignore_patterns(path).context("Failed to load ignore patterns")?,
        None => Vec::new(),
    };

    let ignore_patterns = merge_vecs(vec![
        preset.ignore.unwrap_or_default(),
        file_patterns,
        cli.patterns.unwrap_or_default(),
    ]);

    let max_depth = cli.depth.or(preset.depth).and_then(depth_limit);

    Ok(RuntimeConfig {
        repo_url: cli.git_repo,
        ignore_patterns,
        max_depth,
        output_dir: cli.output,
        print_tree: cli.tree,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["repo_skeleton", "-g", "https://github.com/user/repo.git"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn ignore_file_skips_comments_and_blanks() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# generated dirs").unwrap();
        writeln!(file, "node_modules").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "   build*   ").unwrap();
        writeln!(file, "   ").unwrap();

        let patterns = load_ignore_patterns(file.path()).unwrap();
        assert_eq!(patterns, vec!["node_modules", "build*"]);
    }

    #[test]
    fn missing_ignore_file_is_an_error() {
        let err = resolve_with_presets(
            cli(&["-i", "/definitely/not/here/ignore.txt"]),
            "repo",
            &HashMap::new(),
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to load ignore patterns"));
    }

    #[test]
    fn parses_presets_toml() {
        let presets = parse_presets(
            r#"
            [repo]
            ignore = ["target", "node_modules"]
            depth = 2

            [other]
            depth = -1
            "#,
        )
        .unwrap();

        assert_eq!(
            presets["repo"],
            PresetConfig {
                ignore: Some(vec!["target".into(), "node_modules".into()]),
                depth: Some(2),
            }
        );
        assert_eq!(presets["other"].depth, Some(-1));
    }

    #[test]
    fn preset_is_detected_from_repo_name() {
        let presets = parse_presets("[repo]\nignore = [\"target\"]\ndepth = 4\n").unwrap();
        let config = resolve_with_presets(cli(&["-p", "docs"]), "repo", &presets).unwrap();

        assert_eq!(config.ignore_patterns, vec!["target", "docs"]);
        assert_eq!(config.max_depth, Some(4));
        assert_eq!(config.repo_url, "https://github.com/user/repo.git");
    }

    #[test]
    fn cli_depth_overrides_preset() {
        let presets = parse_presets("[repo]\ndepth = 4\n").unwrap();
        let config = resolve_with_presets(cli(&["-d", "-1"]), "repo", &presets).unwrap();
        assert_eq!(config.max_depth, None);
    }

    #[test]
    fn explicit_preset_wins_over_repo_name() {
        let presets =
            parse_presets("[repo]\nignore = [\"a\"]\n\n[web]\nignore = [\"b\", \"a\"]\n").unwrap();
        let config =
            resolve_with_presets(cli(&["--preset", "web", "-p", "a"]), "repo", &presets).unwrap();
        assert_eq!(config.ignore_patterns, vec!["b", "a"]);
    }

    #[test]
    fn defaults_without_presets() {
        let config = resolve_with_presets(cli(&[]), "repo", &HashMap::new()).unwrap();
        assert!(config.ignore_patterns.is_empty());
        assert_eq!(config.max_depth, None);
        assert!(!config.print_tree);
    }
}

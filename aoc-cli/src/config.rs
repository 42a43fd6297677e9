//! Configuration resolution from CLI args and environment

use crate::cli::Args;
use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Environment variable consulted when `--input-dir` is absent
pub const INPUT_DIR_ENV: &str = "AOC_INPUT_DIR";

const DEFAULT_INPUT_DIR: &str = "~/.cache/aoc_solver/inputs";

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Directory holding puzzle inputs
    pub input_dir: PathBuf,
    /// Quiet mode
    pub quiet: bool,
    /// Debug logging
    pub verbose: bool,
}

impl Config {
    /// Build config from CLI args, falling back to `AOC_INPUT_DIR`
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        Self::from_args_and_env(args, std::env::var_os(INPUT_DIR_ENV).map(PathBuf::from))
    }

    fn from_args_and_env(args: Args, env_input_dir: Option<PathBuf>) -> Result<Self, CliError> {
        let input_dir = args
            .input_dir
            .or(env_input_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR));
        if input_dir.as_os_str().is_empty() {
            return Err(CliError::Config("input directory must not be empty".to_string()));
        }

        let tags: Vec<String> = args
            .tags
            .into_iter()
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect();

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags,
            input_dir: expand_tilde(&input_dir),
            quiet: args.quiet,
            verbose: args.verbose,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("aoc").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_flag_beats_env() {
        let config = Config::from_args_and_env(
            args(&["--input-dir", "/from/flag"]),
            Some(PathBuf::from("/from/env")),
        )
        .unwrap();
        assert_eq!(config.input_dir, PathBuf::from("/from/flag"));
    }

    #[test]
    fn test_env_beats_default() {
        let config =
            Config::from_args_and_env(args(&[]), Some(PathBuf::from("/from/env"))).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("/from/env"));
    }

    #[test]
    fn test_default_is_under_home() {
        let config = Config::from_args_and_env(args(&[]), None).unwrap();
        if let Some(home) = dirs::home_dir() {
            assert_eq!(config.input_dir, home.join(".cache/aoc_solver/inputs"));
        }
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde(Path::new("/abs/path")), PathBuf::from("/abs/path"));
        assert_eq!(expand_tilde(Path::new("rel/~")), PathBuf::from("rel/~"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~")), home);
            assert_eq!(expand_tilde(Path::new("~/inputs")), home.join("inputs"));
        }
    }

    #[test]
    fn test_blank_tags_dropped() {
        let config = Config::from_args_and_env(args(&["--tags", "grid, ,bfs "]), None).unwrap();
        assert_eq!(config.tags, vec!["grid", "bfs"]);
    }

    #[test]
    fn test_empty_env_input_dir_rejected() {
        let result = Config::from_args_and_env(args(&[]), Some(PathBuf::new()));
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}

//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Generate a tag index of function definitions in shell scripts
#[derive(Parser, Debug)]
#[command(name = "shtags")]
#[command(about = "Extracts function definitions from sh/bash/ksh/zsh scripts into a tag file")]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Files or directories to scan
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "ctags", value_enum)]
    pub format: OutputFormat,

    /// Write output to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Descend into directories
    #[arg(short = 'R', long)]
    pub recursive: bool,

    /// Maximum directory depth with --recursive
    #[arg(long, default_value_t = 10)]
    pub max_depth: usize,

    /// Keep tags in scan order instead of sorting by name
    #[arg(long)]
    pub unsorted: bool,

    /// Configuration file (default: ./.shtags.toml, then the user config dir)
    #[arg(long, value_name = "FILE", env = "SHTAGS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log scanning progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Extended ctags tag file - default
    #[default]
    Ctags,
    /// JSON - one object per scanned file
    Json,
    /// TOON (Token-Oriented Object Notation) - token-efficient format
    Toon,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Default log filter when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "shtags=debug"
        } else {
            "shtags=warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["shtags", "a.sh"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Ctags);
        assert!(!cli.recursive);
        assert!(!cli.unsorted);
        assert_eq!(cli.max_depth, 10);
        assert_eq!(cli.log_filter(), "shtags=warn");
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "shtags", "-R", "--max-depth", "2", "-f", "json", "-o", "tags", "-v", "src",
        ])
        .unwrap();
        assert!(cli.recursive);
        assert_eq!(cli.max_depth, 2);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.output, Some(PathBuf::from("tags")));
        assert_eq!(cli.log_filter(), "shtags=debug");
    }

    #[test]
    fn test_paths_required() {
        assert!(Cli::try_parse_from(["shtags"]).is_err());
    }
}

/*!
 * Configuration handling for aipt
 *
 * Every tunable can come from a command-line flag or an `AI_PT_*`
 * environment variable; the flag wins, then the variable, then the
 * built-in default.
 */

use std::collections::{BTreeSet, HashMap};
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{ArgAction, Parser};
use clap_complete::Shell;

use crate::ensure;
use crate::error::Result;
use crate::types::OutputMode;
use crate::utils::{
    DEFAULT_EXCLUDE_DIRS, DEFAULT_EXTENSIONS, DEFAULT_LANGUAGES, DEFAULT_MAX_DEPTH,
    DEFAULT_MAX_SIZE,
};

/// Prefix shared by all configuration environment variables
pub const ENV_PREFIX: &str = "AI_PT_";

/// Command-line arguments for aipt
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "ai-pt",
    version = env!("CARGO_PKG_VERSION"),
    about = "Analyze a project and format its structure and code for AI context",
    long_about = "Analyze a project directory (or a single file) and return its structure with code content in an AI-friendly format.\n\n\
If PATH is a file, only that file is analyzed. If PATH is a directory, the whole directory is analyzed.\n\n\
Configuration can also be set via environment variables:\n  \
AI_PT_EXCLUDE_DIRS  comma-separated directory names to exclude\n  \
AI_PT_MAX_SIZE      maximum file size in bytes\n  \
AI_PT_EXTENSIONS    comma-separated file extensions to include\n  \
AI_PT_MAX_DEPTH     maximum depth of the directory tree"
)]
pub struct Args {
    /// Project directory or file path
    #[clap(default_value = ".")]
    pub path: String,

    /// Framework to mention with every file (e.g. FastAPI, React, Django)
    #[clap(short, long)]
    pub framework: Option<String>,

    /// Question to put at the beginning of the output
    #[clap(short, long)]
    pub question: Option<String>,

    /// Maximum file size to read, in bytes
    #[clap(short = 'm', long, env = "AI_PT_MAX_SIZE", value_parser = number_or_blank::<u64>)]
    pub max_size: Option<String>,

    /// Maximum depth of the directory tree
    #[clap(long, env = "AI_PT_MAX_DEPTH", value_parser = number_or_blank::<usize>)]
    pub max_depth: Option<String>,

    /// Comma-separated directory names to exclude
    #[clap(long, env = "AI_PT_EXCLUDE_DIRS", value_delimiter = ',')]
    pub exclude_dirs: Vec<String>,

    /// Comma-separated file extensions to include
    #[clap(long, env = "AI_PT_EXTENSIONS", value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Which sections to output
    #[clap(short, long, value_enum, default_value_t = OutputMode::Both)]
    pub output: OutputMode,

    /// Include large files (content will be skipped)
    #[clap(short = 'l', long)]
    pub include_large: bool,

    /// Do not copy to clipboard (print only)
    #[clap(long)]
    pub no_copy: bool,

    /// Show current configuration and exit
    #[clap(long)]
    pub show_config: bool,

    /// Print a summary table to stderr when done
    #[clap(long)]
    pub stats: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[clap(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory or file to analyze
    pub target: PathBuf,

    /// Directory names never traversed
    pub exclude_dirs: BTreeSet<String>,

    /// File suffixes that qualify a file for inclusion
    pub extensions: BTreeSet<String>,

    /// Extension to language tag
    pub languages: HashMap<String, String>,

    /// Content size ceiling in bytes
    pub max_size: u64,

    /// Tree rendering depth limit
    pub max_depth: usize,

    /// Sections to emit in directory mode
    pub output: OutputMode,

    /// Framework named in every file block
    pub framework: Option<String>,

    /// Question placed at the top of the document
    pub question: Option<String>,

    /// Keep oversize files (as notes) in the output
    pub include_large: bool,

    /// Copy the finished document to the clipboard
    pub copy: bool,

    /// Print the summary table
    pub stats: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: PathBuf::from("."),
            exclude_dirs: to_set(DEFAULT_EXCLUDE_DIRS),
            extensions: to_set(DEFAULT_EXTENSIONS),
            languages: DEFAULT_LANGUAGES
                .iter()
                .map(|(ext, lang)| (ext.to_string(), lang.to_string()))
                .collect(),
            max_size: DEFAULT_MAX_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
            output: OutputMode::Both,
            framework: None,
            question: None,
            include_large: false,
            copy: true,
            stats: false,
        }
    }
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let defaults = Self::default();
        Self {
            target: PathBuf::from(args.path),
            exclude_dirs: parse_list(args.exclude_dirs, defaults.exclude_dirs),
            extensions: parse_list(args.extensions, defaults.extensions),
            languages: defaults.languages,
            max_size: parse_number(args.max_size).unwrap_or(defaults.max_size),
            max_depth: parse_number(args.max_depth).unwrap_or(defaults.max_depth),
            output: args.output,
            framework: args.framework,
            question: args.question,
            include_large: args.include_large,
            copy: !args.no_copy,
            stats: args.stats,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.max_size > 0,
            Config,
            "max size must be greater than 0 bytes"
        );
        ensure!(
            !self.extensions.is_empty(),
            Config,
            "at least one file extension is required"
        );
        Ok(())
    }

    /// Comma-joined, sorted list of supported extensions
    pub fn supported_extensions(&self) -> String {
        self.extensions
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Human-readable description of the effective configuration
    pub fn describe(&self) -> String {
        let exclude_dirs: Vec<&str> = self.exclude_dirs.iter().map(String::as_str).collect();

        let mut out = String::from("📋 Current Configuration:\n");
        out.push_str(&format!(
            "  Exclude directories: {}\n",
            exclude_dirs.join(", ")
        ));
        out.push_str(&format!("  Max file size: {} bytes\n", self.max_size));
        out.push_str(&format!(
            "  File extensions: {}\n",
            self.supported_extensions()
        ));
        out.push_str(&format!("  Max directory depth: {}\n", self.max_depth));
        out.push_str(&format!("\nEnvironment variables used: {}*\n", ENV_PREFIX));
        out.push_str("Example: AI_PT_EXCLUDE_DIRS='dist,build,coverage' ai-pt /path/to/project");
        out
    }
}

fn to_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Accept a blank value (an exported but empty variable) or a number
fn number_or_blank<T>(value: &str) -> std::result::Result<String, String>
where
    T: FromStr,
    T::Err: Display,
{
    let trimmed = value.trim();
    if !trimmed.is_empty() {
        trimmed.parse::<T>().map_err(|e| e.to_string())?;
    }
    Ok(trimmed.to_string())
}

/// Blank counts as unset
fn parse_number<T: FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|v| v.trim().parse().ok())
}

/// Trim every item, drop empty ones, fall back to `defaults` if nothing is left
fn parse_list(values: Vec<String>, defaults: BTreeSet<String>) -> BTreeSet<String> {
    let parsed: BTreeSet<String> = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();

    if parsed.is_empty() {
        defaults
    } else {
        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(argv: &[&str]) -> Config {
        let args = Args::try_parse_from(argv).expect("arguments should parse");
        Config::from_args(args)
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.max_size, 600_000);
        assert_eq!(config.max_depth, 3);
        assert!(config.exclude_dirs.contains(".git"));
        assert!(config.exclude_dirs.contains("node_modules"));
        assert!(config.extensions.contains(".py"));
        assert!(config.extensions.contains(".toml"));
        assert_eq!(config.languages[".py"], "python");
        assert!(config.copy);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_list_overrides_replace_defaults() {
        let config = config_from(&[
            "ai-pt",
            "--exclude-dirs",
            "custom1, custom2,custom3",
            "--extensions",
            ".py,.js",
        ]);

        assert_eq!(
            config.exclude_dirs,
            to_set(&["custom1", "custom2", "custom3"])
        );
        assert!(!config.exclude_dirs.contains(".git"));
        assert_eq!(config.extensions, to_set(&[".js", ".py"]));
        assert!(!config.extensions.contains(".html"));
    }

    #[test]
    fn test_blank_list_falls_back_to_defaults() {
        let config = config_from(&["ai-pt", "--extensions", " , "]);
        assert_eq!(config.extensions, to_set(DEFAULT_EXTENSIONS));
    }

    #[test]
    fn test_numeric_overrides() {
        let config = config_from(&["ai-pt", "-m", "1000000", "--max-depth", "5"]);
        assert_eq!(config.max_size, 1_000_000);
        assert_eq!(config.max_depth, 5);
    }

    #[test]
    fn test_unparsable_size_is_rejected() {
        let result = Args::try_parse_from(["ai-pt", "--max-size", "lots"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_numbers_fall_back_to_defaults() {
        let config = config_from(&["ai-pt", "--max-size", "", "--max-depth", " "]);
        assert_eq!(config.max_size, DEFAULT_MAX_SIZE);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);

        let result = Args::try_parse_from(["ai-pt", "--max-depth", "deep"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_size_fails_validation() {
        let config = config_from(&["ai-pt", "--max-size", "0"]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max size"));
    }

    #[test]
    fn test_cli_flags() {
        let config = config_from(&[
            "ai-pt",
            "project",
            "-f",
            "Flask",
            "-q",
            "Why?",
            "-o",
            "structure",
            "-l",
            "--no-copy",
        ]);

        assert_eq!(config.target, PathBuf::from("project"));
        assert_eq!(config.framework.as_deref(), Some("Flask"));
        assert_eq!(config.question.as_deref(), Some("Why?"));
        assert_eq!(config.output, OutputMode::Structure);
        assert!(config.include_large);
        assert!(!config.copy);
    }

    #[test]
    fn test_describe() {
        let text = Config::default().describe();
        assert!(text.contains("Current Configuration:"));
        assert!(text.contains("Exclude directories:"));
        assert!(text.contains("Max file size: 600000 bytes"));
        assert!(text.contains("Max directory depth: 3"));
        assert!(text.contains("Environment variables used: AI_PT_*"));
    }
}

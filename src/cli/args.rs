//! Command line argument parsing for the fastspell CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellError};

/// fastspell - dictionary spell checking with bounded edit distance suggestions
#[derive(Parser, Debug, Clone)]
#[command(name = "fastspell")]
#[command(about = "Spell checking and correction with bounded edit distance suggestions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct FastSpellArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Directory of word lists (*.txt, *.dic), each named after its file stem
    #[arg(short = 'd', long, value_name = "DIR", global = true)]
    pub dict_dir: Option<PathBuf>,

    /// Additional word list as NAME=PATH (repeatable)
    #[arg(long = "dict", value_name = "NAME=PATH", global = true)]
    pub dicts: Vec<String>,

    /// Word lists to activate (comma-separated)
    #[arg(short, long = "lang", value_delimiter = ',', global = true)]
    pub languages: Vec<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl FastSpellArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Parse the `--dict NAME=PATH` arguments.
    pub fn dict_specs(&self) -> Result<Vec<(String, PathBuf)>> {
        self.dicts.iter().map(|spec| parse_dict_spec(spec)).collect()
    }
}

/// Split a `NAME=PATH` word list argument.
pub fn parse_dict_spec(spec: &str) -> Result<(String, PathBuf)> {
    match spec.split_once('=') {
        Some((name, path)) if !name.trim().is_empty() && !path.trim().is_empty() => {
            Ok((name.trim().to_string(), PathBuf::from(path.trim())))
        }
        _ => Err(SpellError::invalid_argument(format!(
            "expected NAME=PATH for --dict, got '{spec}'"
        ))),
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check whether words are in the active vocabulary
    Check(CheckArgs),

    /// Suggest corrections for a word
    Suggest(SuggestArgs),

    /// Correct a sentence, or every line read from stdin
    Correct(CorrectArgs),

    /// Compute the bounded edit distance between two words
    Distance(DistanceArgs),

    /// List available and active word lists
    Languages,
}

/// Arguments for checking words
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Words to check
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Possibly misspelled word
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum edit distance (defaults to the configured value)
    #[arg(short = 'm', long)]
    pub max_distance: Option<usize>,

    /// Maximum number of suggestions (defaults to the configured value)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Arguments for text correction
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Text to correct; reads lines from stdin when omitted
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Maximum edit distance (defaults to the configured value)
    #[arg(short = 'm', long)]
    pub max_distance: Option<usize>,
}

/// Arguments for the distance command
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// First word
    #[arg(value_name = "A")]
    pub a: String,

    /// Second word
    #[arg(value_name = "B")]
    pub b: String,

    /// Cap on the distance of interest
    #[arg(short = 'm', long, default_value = "2")]
    pub max_distance: usize,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

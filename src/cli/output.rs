//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::args::{FastSpellArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::{Correction, CorrectionResult, Suggestion};

/// Renders a result for people rather than machines.
pub trait HumanOutput {
    /// Write the human-readable form of `self`.
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Membership of a single word.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordCheck {
    pub word: String,
    pub known: bool,
}

/// Result of the `check` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResults {
    pub words: Vec<WordCheck>,
    pub known: usize,
}

/// Result of the `suggest` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResults {
    pub word: String,
    pub known: bool,
    pub max_distance: usize,
    pub suggestions: Vec<Suggestion>,
}

/// Result of the `correct` command for one piece of text.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectResults {
    pub original: String,
    pub corrected: String,
    pub known_words: usize,
    pub corrections: Vec<Correction>,
}

impl From<CorrectionResult> for CorrectResults {
    fn from(result: CorrectionResult) -> Self {
        CorrectResults {
            original: result.original,
            corrected: result.corrected,
            known_words: result.known_words,
            corrections: result.corrections,
        }
    }
}

/// Result of the `distance` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResults {
    pub a: String,
    pub b: String,
    pub max_distance: usize,
    pub distance: usize,
    pub within: bool,
}

/// A word list known to the CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub name: String,
    pub active: bool,
}

/// Result of the `languages` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct LanguageResults {
    pub languages: Vec<LanguageInfo>,
    pub max_selected: usize,
    pub active_words: usize,
    pub length_buckets: usize,
}

impl HumanOutput for CheckResults {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        for check in &self.words {
            let status = if check.known { "ok" } else { "unknown" };
            writeln!(out, "{:<20} {}", check.word, status)?;
        }
        writeln!(out, "{} of {} known", self.known, self.words.len())
    }
}

impl HumanOutput for SuggestResults {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.known {
            writeln!(out, "'{}' is a known word", self.word)?;
        }
        if self.suggestions.is_empty() {
            return writeln!(
                out,
                "No suggestions for '{}' within distance {}",
                self.word, self.max_distance
            );
        }
        for (i, suggestion) in self.suggestions.iter().enumerate() {
            writeln!(
                out,
                "{:>2}. {} (distance {})",
                i + 1,
                suggestion.word,
                suggestion.distance
            )?;
        }
        Ok(())
    }
}

impl HumanOutput for CorrectResults {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Corrected: {}", self.corrected)?;
        writeln!(out, "Known words: {}", self.known_words)
    }
}

impl HumanOutput for DistanceResults {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.within {
            writeln!(out, "{} -> {}: {}", self.a, self.b, self.distance)
        } else {
            writeln!(
                out,
                "{} -> {}: more than {}",
                self.a, self.b, self.max_distance
            )
        }
    }
}

impl HumanOutput for LanguageResults {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.languages.is_empty() {
            writeln!(out, "No word lists available")?;
        }
        for language in &self.languages {
            let marker = if language.active { "*" } else { " " };
            writeln!(out, "{} {}", marker, language.name)?;
        }
        writeln!(
            out,
            "{} active words in {} length buckets (up to {} lists)",
            self.active_words, self.length_buckets, self.max_selected
        )
    }
}

/// Write a result in the requested format.
pub fn write_result<T>(
    out: &mut dyn Write,
    message: &str,
    result: &T,
    args: &FastSpellArgs,
) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                writeln!(out, "{message}")?;
                writeln!(out)?;
            }
            result.write_human(out)?;
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}

/// Output a result to stdout in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &FastSpellArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, message, result, args)
}

//! Command implementations for the fastspell CLI.

use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SpellConfig;
use crate::error::{Result, SpellError};
use crate::spelling::levenshtein::bounded_distance;
use crate::spelling::{SpellChecker, SuggestionEngine, WordLists};

/// Line that ends the interactive prompt.
pub const QUIT_COMMAND: &str = ":q";

/// Execute a CLI command.
pub fn execute_command(args: FastSpellArgs) -> Result<()> {
    if let Command::Distance(distance_args) = &args.command {
        return show_distance(distance_args, &args);
    }

    let config = load_config(&args)?;
    let lists = load_word_lists(&args)?;
    let checker = SpellChecker::from_config(lists, &config)?;

    match &args.command {
        Command::Check(check_args) => check_words(check_args, &checker, &args),
        Command::Suggest(suggest_args) => suggest_word(suggest_args, &checker, &args),
        Command::Correct(correct_args) => correct_text(correct_args, &checker, &args),
        Command::Languages => show_languages(&checker, &args),
        Command::Distance(distance_args) => show_distance(distance_args, &args),
    }
}

/// Read the config file, if any, and apply command line overrides.
pub fn load_config(args: &FastSpellArgs) -> Result<SpellConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("loading config from {}", path.display());
            SpellConfig::load(path)?
        }
        None => SpellConfig::default(),
    };

    if !args.languages.is_empty() {
        config.languages = args.languages.clone();
    }
    Ok(config)
}

/// Collect word lists from `--dict-dir` and `--dict`.
pub fn load_word_lists(args: &FastSpellArgs) -> Result<WordLists> {
    let mut lists = WordLists::new();

    if let Some(dir) = &args.dict_dir {
        let loaded = lists.load_dir(dir)?;
        info!("loaded {} word lists from {}", loaded, dir.display());
    }
    for (name, path) in args.dict_specs()? {
        lists.load_file(name, path)?;
    }

    if lists.is_empty() {
        return Err(SpellError::configuration(
            "no word lists available; use --dict NAME=PATH or --dict-dir DIR",
        ));
    }
    Ok(lists)
}

/// Check membership of each word.
fn check_words(
    args: &CheckArgs,
    checker: &SpellChecker,
    cli_args: &FastSpellArgs,
) -> Result<()> {
    let words: Vec<WordCheck> = args
        .words
        .iter()
        .map(|word| WordCheck {
            word: word.clone(),
            known: checker.contains(word),
        })
        .collect();
    let known = words.iter().filter(|check| check.known).count();

    output_result("Spelling check", &CheckResults { words, known }, cli_args)
}

/// Rank suggestions for one word.
fn suggest_word(
    args: &SuggestArgs,
    checker: &SpellChecker,
    cli_args: &FastSpellArgs,
) -> Result<()> {
    let defaults = checker.suggestion_config();
    let max_distance = args.max_distance.unwrap_or(defaults.max_distance);
    let limit = args.limit.unwrap_or(defaults.max_suggestions);
    if limit == 0 {
        return Err(SpellError::invalid_argument("--limit must be at least 1"));
    }

    let vocabulary = checker.vocabulary();
    let suggestions =
        SuggestionEngine::new(&vocabulary).suggest_with(&args.word, max_distance, limit);

    output_result(
        "Suggestions",
        &SuggestResults {
            word: args.word.clone(),
            known: vocabulary.contains(&args.word),
            max_distance,
            suggestions,
        },
        cli_args,
    )
}

/// Correct the given text, or run the interactive prompt.
fn correct_text(
    args: &CorrectArgs,
    checker: &SpellChecker,
    cli_args: &FastSpellArgs,
) -> Result<()> {
    let max_distance = args
        .max_distance
        .unwrap_or(checker.corrector().config().max_distance);

    match &args.text {
        Some(text) => {
            let result = checker
                .corrector()
                .correct_with(&checker.vocabulary(), text, max_distance);
            output_result("Correction", &CorrectResults::from(result), cli_args)
        }
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let lines = run_interactive(
                checker,
                stdin.lock(),
                &mut stdout.lock(),
                max_distance,
                cli_args,
            )?;
            debug!("interactive session corrected {lines} lines");
            Ok(())
        }
    }
}

/// Correct every line read from `input` until EOF or [`QUIT_COMMAND`].
///
/// In human mode a prompt is written before each line. Returns the number of
/// lines corrected.
pub fn run_interactive<R: BufRead>(
    checker: &SpellChecker,
    mut input: R,
    out: &mut dyn Write,
    max_distance: usize,
    cli_args: &FastSpellArgs,
) -> Result<usize> {
    let prompt = cli_args.output_format == OutputFormat::Human && cli_args.verbosity() > 0;
    let mut line = String::new();
    let mut corrected = 0;

    loop {
        if prompt {
            write!(out, "Enter a sentence: ")?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break; // EOF
        }
        if line.trim() == QUIT_COMMAND {
            break;
        }

        // Snapshot per line so a concurrent language switch never splits a line.
        let result = checker
            .corrector()
            .correct_with(&checker.vocabulary(), &line, max_distance);
        write_result(out, "Correction", &CorrectResults::from(result), cli_args)?;
        corrected += 1;
    }

    Ok(corrected)
}

/// List word lists and the active selection.
fn show_languages(checker: &SpellChecker, cli_args: &FastSpellArgs) -> Result<()> {
    let vocabulary = checker.vocabulary();
    let languages = checker
        .available()
        .into_iter()
        .map(|name| LanguageInfo {
            active: vocabulary.languages().contains(&name),
            name,
        })
        .collect();

    output_result(
        "Word lists",
        &LanguageResults {
            languages,
            max_selected: checker.max_selected(),
            active_words: vocabulary.len(),
            length_buckets: vocabulary.bucket_lengths().count(),
        },
        cli_args,
    )
}

/// Bounded distance between two words; needs no word lists.
fn show_distance(args: &DistanceArgs, cli_args: &FastSpellArgs) -> Result<()> {
    let distance = bounded_distance(
        &args.a.to_lowercase(),
        &args.b.to_lowercase(),
        args.max_distance,
    );

    output_result(
        "Edit distance",
        &DistanceResults {
            a: args.a.clone(),
            b: args.b.clone(),
            max_distance: args.max_distance,
            distance,
            within: distance <= args.max_distance,
        },
        cli_args,
    )
}

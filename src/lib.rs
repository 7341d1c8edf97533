//! # fastspell
//!
//! Dictionary spell checking with bounded edit distance suggestions.
//!
//! ## Features
//!
//! - Capped Levenshtein distance with early termination
//! - Length-bucketed candidate retrieval
//! - Ranked suggestions ordered by distance, then alphabetically
//! - Word-by-word text correction that preserves capitalization
//! - Atomic switching between merged word lists

pub mod cli;
pub mod config;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::config::SpellConfig;
    pub use crate::error::{Result, SpellError};
    pub use crate::spelling::{
        SpellChecker, Suggestion, SuggestionEngine, Vocabulary, VocabularySource, WordLists,
        bounded_distance,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

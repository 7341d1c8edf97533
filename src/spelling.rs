//! Spelling checks, suggestions and text correction.
//!
//! Word lists are merged into an immutable [`Vocabulary`] that indexes words by
//! length. Suggestions only scan the buckets whose length is within the edit
//! distance threshold of the query, and score each candidate with a bounded
//! Levenshtein distance that stops as soon as the threshold is exceeded.

pub mod checker;
pub mod corrector;
pub mod dictionary;
pub mod levenshtein;
pub mod overrides;
pub mod source;
pub mod suggest;

// Re-export commonly used types
pub use checker::{SpellChecker, build_vocabulary};
pub use corrector::{
    Correction, CorrectionKind, CorrectionResult, CorrectorConfig, SpellingCorrector, count_known,
};
pub use dictionary::{Vocabulary, VocabularyBuilder};
pub use levenshtein::{LevenshteinMatcher, bounded_distance};
pub use overrides::OverrideTable;
pub use source::{VocabularySource, WordLists};
pub use suggest::{Suggestion, SuggestionConfig, SuggestionEngine};

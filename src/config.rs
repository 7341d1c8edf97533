//! Configuration for fastspell.
//!
//! Settings are read from a JSON file; every field is optional and falls back
//! to its default.
//!
//! ```json
//! {
//!   "max_distance": 2,
//!   "max_suggestions": 5,
//!   "max_selected": 3,
//!   "separator": "/",
//!   "languages": ["eng"],
//!   "overrides": { "see": "he" }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellError};
use crate::spelling::corrector::CorrectorConfig;
use crate::spelling::overrides::OverrideTable;
use crate::spelling::source::DEFAULT_SEPARATOR;
use crate::spelling::suggest::{DEFAULT_MAX_DISTANCE, DEFAULT_MAX_SUGGESTIONS, SuggestionConfig};

/// Default maximum number of word lists merged into one vocabulary.
pub const DEFAULT_MAX_SELECTED: usize = 3;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellConfig {
    /// Maximum edit distance for suggestions and corrections.
    pub max_distance: usize,
    /// Maximum number of suggestions per word.
    pub max_suggestions: usize,
    /// Maximum number of word lists that can be active at once.
    pub max_selected: usize,
    /// Separator between a word and its decoration in raw word lists.
    pub separator: char,
    /// Word lists to activate on start-up; empty selects the defaults.
    pub languages: Vec<String>,
    /// Replaces the built-in override table when present.
    pub overrides: Option<BTreeMap<String, String>>,
}

impl Default for SpellConfig {
    fn default() -> Self {
        SpellConfig {
            max_distance: DEFAULT_MAX_DISTANCE,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            max_selected: DEFAULT_MAX_SELECTED,
            separator: DEFAULT_SEPARATOR,
            languages: Vec::new(),
            overrides: None,
        }
    }
}

impl SpellConfig {
    /// Load and validate a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SpellConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no query could work with.
    pub fn validate(&self) -> Result<()> {
        if self.max_suggestions == 0 {
            return Err(SpellError::configuration(
                "max_suggestions must be at least 1",
            ));
        }
        if self.max_selected == 0 {
            return Err(SpellError::configuration("max_selected must be at least 1"));
        }
        if self.separator.is_whitespace() && self.separator != '\t' {
            return Err(SpellError::configuration(
                "separator must not be a space or line break",
            ));
        }
        Ok(())
    }

    /// The override table described by this configuration.
    pub fn override_table(&self) -> OverrideTable {
        match &self.overrides {
            Some(map) => OverrideTable::from(map.clone()),
            None => OverrideTable::common_misused(),
        }
    }

    /// Suggestion limits.
    pub fn suggestion_config(&self) -> SuggestionConfig {
        SuggestionConfig {
            max_distance: self.max_distance,
            max_suggestions: self.max_suggestions,
        }
    }

    /// Corrector settings.
    pub fn corrector_config(&self) -> CorrectorConfig {
        CorrectorConfig {
            max_distance: self.max_distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = SpellConfig::default();
        assert_eq!(config.max_distance, 2);
        assert_eq!(config.max_suggestions, 5);
        assert_eq!(config.max_selected, 3);
        assert_eq!(config.separator, '/');
        assert!(config.validate().is_ok());
        assert_eq!(config.override_table(), OverrideTable::common_misused());
    }

    #[test]
    fn test_load_partial_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"{{"max_distance": 1, "languages": ["eng"], "overrides": {{"teh": "the"}}}}"#
        )
        .unwrap();
        temp_file.flush().unwrap();

        let config = SpellConfig::load(temp_file.path()).unwrap();
        assert_eq!(config.max_distance, 1);
        assert_eq!(config.max_suggestions, 5);
        assert_eq!(config.languages, vec!["eng".to_string()]);

        let table = config.override_table();
        assert_eq!(table.get("teh"), Some("the"));
        assert_eq!(table.get("see"), None);
        assert_eq!(config.suggestion_config().max_distance, 1);
        assert_eq!(config.corrector_config().max_distance, 1);
    }

    #[test]
    fn test_invalid_values() {
        let config = SpellConfig {
            max_suggestions: 0,
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().is_configuration());

        let config = SpellConfig {
            max_selected: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SpellConfig {
            separator: ' ',
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{{ not json").unwrap();
        temp_file.flush().unwrap();

        let err = SpellConfig::load(temp_file.path()).unwrap_err();
        assert!(matches!(err, SpellError::Json(_)));
    }
}

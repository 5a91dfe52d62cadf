//! Generation configuration.

use crate::error::GenerationError;

/// Immutable settings shared by both generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GenerationConfig {
    /// Exact length of every generated password.
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    /// Drop look-alike characters (`0 O 1 l I`).
    pub avoid_similar: bool,
    /// Drop bracket/quote/punctuation characters that are easy to mistype.
    pub avoid_ambiguous: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            avoid_similar: false,
            avoid_ambiguous: false,
        }
    }
}

impl GenerationConfig {
    /// Config with the given length and only the selected categories enabled.
    pub fn with_categories(
        length: usize,
        uppercase: bool,
        lowercase: bool,
        numbers: bool,
        symbols: bool,
    ) -> Self {
        Self {
            length,
            include_uppercase: uppercase,
            include_lowercase: lowercase,
            include_numbers: numbers,
            include_symbols: symbols,
            avoid_similar: false,
            avoid_ambiguous: false,
        }
    }

    /// Returns `true` if at least one character category is enabled.
    pub fn has_any_category(&self) -> bool {
        self.include_uppercase || self.include_lowercase || self.include_numbers || self.include_symbols
    }

    /// Checks that the config can produce passwords.
    ///
    /// There is no lowercase fallback: a config without categories is rejected.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.length == 0 {
            return Err(GenerationError::Configuration(
                "password length must be at least 1".to_string(),
            ));
        }
        if !self.has_any_category() {
            return Err(GenerationError::Configuration(
                "at least one character category must be enabled".to_string(),
            ));
        }
        Ok(())
    }
}

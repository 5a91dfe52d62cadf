//! Character policy - categories, exclusion sets, and allowed pools.

use rand::Rng;

use crate::config::GenerationConfig;
use crate::error::GenerationError;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
/// All 32 printable ASCII punctuation characters.
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Characters that are easily confused with each other.
pub const SIMILAR_CHARS: &str = "0O1lI";
/// Punctuation that is easy to mistype or misread.
pub const AMBIGUOUS_CHARS: &str = "{}[]()/\\'\"`~,;:.<>";

/// Character category. Every character belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Category {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl Category {
    /// Pool order: lowercase, uppercase, numbers, symbols.
    pub const ALL: [Category; 4] = [
        Category::Lowercase,
        Category::Uppercase,
        Category::Numbers,
        Category::Symbols,
    ];

    /// Full, unfiltered character set of this category.
    pub fn charset(self) -> &'static str {
        match self {
            Category::Lowercase => LOWERCASE,
            Category::Uppercase => UPPERCASE,
            Category::Numbers => NUMBERS,
            Category::Symbols => SYMBOLS,
        }
    }

    /// Alphabet size used by the entropy estimator (26/26/10/32).
    pub fn theoretical_size(self) -> usize {
        match self {
            Category::Lowercase | Category::Uppercase => 26,
            Category::Numbers => 10,
            Category::Symbols => 32,
        }
    }

    /// Minimum occurrences required when the category is enabled.
    pub fn minimum_count(self) -> usize {
        match self {
            Category::Numbers | Category::Symbols => 2,
            Category::Lowercase | Category::Uppercase => 1,
        }
    }

    /// Whether the config enables this category.
    pub fn is_enabled(self, config: &GenerationConfig) -> bool {
        match self {
            Category::Lowercase => config.include_lowercase,
            Category::Uppercase => config.include_uppercase,
            Category::Numbers => config.include_numbers,
            Category::Symbols => config.include_symbols,
        }
    }
}

/// Classifies a character. Anything that is not an ASCII letter or digit is a symbol.
pub fn classify(c: char) -> Category {
    match c {
        'a'..='z' => Category::Lowercase,
        'A'..='Z' => Category::Uppercase,
        '0'..='9' => Category::Numbers,
        _ => Category::Symbols,
    }
}

/// Ordered, non-empty set of characters admissible under a config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
    categories: Vec<(Category, Vec<char>)>,
}

impl CharacterPool {
    /// Builds the pool for a config.
    ///
    /// Exclusions are applied per category and skipped when they would leave
    /// that category empty.
    ///
    /// # Arguments
    /// * `config` - Enabled categories and exclusion flags
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if:
    /// - `config.length` is zero
    /// - No category is enabled
    pub fn build(config: &GenerationConfig) -> Result<Self, GenerationError> {
        config.validate()?;

        let categories: Vec<(Category, Vec<char>)> = Category::ALL
            .into_iter()
            .filter(|cat| cat.is_enabled(config))
            .map(|cat| {
                let mut chars: Vec<char> = cat.charset().chars().collect();
                if config.avoid_similar {
                    chars = exclude_if_non_empty(chars, SIMILAR_CHARS);
                }
                if config.avoid_ambiguous {
                    chars = exclude_if_non_empty(chars, AMBIGUOUS_CHARS);
                }
                (cat, chars)
            })
            .collect();

        let chars: Vec<char> = categories
            .iter()
            .flat_map(|(_, chars)| chars.iter().copied())
            .collect();

        if chars.is_empty() {
            return Err(GenerationError::Configuration(
                "character pool is empty".to_string(),
            ));
        }

        Ok(Self { chars, categories })
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Enabled categories in pool order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.iter().map(|(cat, _)| *cat)
    }

    pub fn has_category(&self, category: Category) -> bool {
        self.categories.iter().any(|(cat, _)| *cat == category)
    }

    /// Allowed characters of one category, or `None` if it is disabled.
    pub fn category_chars(&self, category: Category) -> Option<&[char]> {
        self.categories
            .iter()
            .find(|(cat, _)| *cat == category)
            .map(|(_, chars)| chars.as_slice())
    }

    /// Uniform draw from the whole pool.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> char {
        self.chars[rng.random_range(0..self.chars.len())]
    }

    /// Uniform draw from one category, or `None` if it is disabled.
    pub fn sample_category<R: Rng>(&self, category: Category, rng: &mut R) -> Option<char> {
        self.category_chars(category)
            .filter(|chars| !chars.is_empty())
            .map(|chars| chars[rng.random_range(0..chars.len())])
    }

    /// Candidates for replacing a character of `category`: the allowed
    /// characters of that category, or the whole pool if it is disabled.
    pub fn replacement_candidates(&self, category: Category) -> &[char] {
        match self.category_chars(category) {
            Some(chars) if !chars.is_empty() => chars,
            _ => &self.chars,
        }
    }
}

fn exclude_if_non_empty(chars: Vec<char>, excluded: &str) -> Vec<char> {
    let filtered: Vec<char> = chars
        .iter()
        .copied()
        .filter(|c| !excluded.contains(*c))
        .collect();
    if filtered.is_empty() { chars } else { filtered }
}

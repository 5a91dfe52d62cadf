//! Readability sections
//!
//! Each section awards points for one memorability trait. The score of a
//! password is the sum over all sections, at most [`MAX_READABILITY_SCORE`].

mod composition;
mod dictionary;
mod pronounceable;

use composition::{length_section, mixed_case_section, symbol_ratio_section};
use dictionary::dictionary_section;
use pronounceable::pronounceable_section;

/// Highest score a single password can reach.
pub const MAX_READABILITY_SCORE: u8 = 6;

/// Points awarded by one section.
pub type SectionScore = u8;

/// Sums every section for one password.
pub fn readability_score(password: &str) -> u8 {
    let sections: [(&str, fn(&str) -> SectionScore); 5] = [
        ("dictionary", dictionary_section),
        ("pronounceable", pronounceable_section),
        ("length", length_section),
        ("symbol_ratio", symbol_ratio_section),
        ("mixed_case", mixed_case_section),
    ];

    let mut score = 0;
    for (_section_name, section_fn) in sections {
        let points = section_fn(password);
        #[cfg(feature = "tracing")]
        tracing::trace!("readability section '{}': {} points", _section_name, points);
        score += points;
    }
    score.min(MAX_READABILITY_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readability_max_score() {
        // word + "ra" pair + length 10 + 1 symbol + both cases
        assert_eq!(readability_score("Dragon!ray"), 6);
    }

    #[test]
    fn test_readability_min_score() {
        // no word, no consonant-vowel pair, too short, all symbols, one case
        assert_eq!(readability_score("#$%"), 0);
    }

    #[test]
    fn test_readability_random_string() {
        // length and symbol ratio only
        assert_eq!(readability_score("x7#k9q2z"), 2);
    }

    #[test]
    fn test_readability_empty() {
        assert_eq!(readability_score(""), 1);
    }
}

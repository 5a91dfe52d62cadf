//! Composition sections - length window, symbol ratio, and letter case.

use super::SectionScore;
use crate::charset::{Category, classify};

const MIN_READABLE_LENGTH: usize = 8;
const MAX_READABLE_LENGTH: usize = 20;
const MAX_SYMBOL_RATIO: f64 = 0.3;

/// 1 point for a length between 8 and 20 characters.
pub fn length_section(password: &str) -> SectionScore {
    let length = password.chars().count();
    u8::from((MIN_READABLE_LENGTH..=MAX_READABLE_LENGTH).contains(&length))
}

/// 1 point if at most 30% of the characters are symbols.
///
/// An empty password has no symbols and earns the point.
pub fn symbol_ratio_section(password: &str) -> SectionScore {
    let length = password.chars().count();
    if length == 0 {
        return 1;
    }
    let symbols = password
        .chars()
        .filter(|c| classify(*c) == Category::Symbols)
        .count();
    u8::from(symbols as f64 / length as f64 <= MAX_SYMBOL_RATIO)
}

/// 1 point if both upper and lower case letters appear.
pub fn mixed_case_section(password: &str) -> SectionScore {
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    u8::from(has_upper && has_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_bounds() {
        assert_eq!(length_section("1234567"), 0);
        assert_eq!(length_section("12345678"), 1);
        assert_eq!(length_section(&"x".repeat(20)), 1);
        assert_eq!(length_section(&"x".repeat(21)), 0);
    }

    #[test]
    fn test_symbol_ratio_section() {
        assert_eq!(symbol_ratio_section("abcdefg!!!"), 1);
        assert_eq!(symbol_ratio_section("abcdefg!!!!"), 0);
        assert_eq!(symbol_ratio_section(""), 1);
    }

    #[test]
    fn test_mixed_case_section() {
        assert_eq!(mixed_case_section("aB"), 1);
        assert_eq!(mixed_case_section("abc"), 0);
        assert_eq!(mixed_case_section("ABC1"), 0);
    }
}

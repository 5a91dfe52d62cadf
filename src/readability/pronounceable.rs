//! Pronounceable section - consonant immediately followed by a vowel.

use super::SectionScore;

const VOWELS: &str = "aeiou";

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c.to_ascii_lowercase())
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}

/// 1 point if any consonant is directly followed by a vowel.
pub fn pronounceable_section(password: &str) -> SectionScore {
    let chars: Vec<char> = password.chars().collect();
    let found = chars
        .windows(2)
        .any(|pair| is_consonant(pair[0]) && is_vowel(pair[1]));
    u8::from(found)
}

//! Dictionary section - rewards embedded common words.

use super::SectionScore;

/// Common English words and password fragments, lowercase.
pub const COMMON_WORDS: &[&str] = &[
    "pass", "word", "love", "star", "king", "dragon", "monkey", "sun", "moon", "shadow",
    "master", "dog", "cat", "fish", "bird", "tiger", "eagle", "horse", "apple", "orange",
    "house", "garden", "river", "ocean", "cloud", "rain", "snow", "fire", "water", "light",
    "dark", "blue", "red", "green", "gold", "silver", "rock", "summer", "winter", "spring",
    "happy", "lucky", "magic", "secret", "hello", "admin", "user", "login", "money", "power",
    "game", "play", "home", "life", "time", "day", "night", "baby", "angel", "hero",
    "ninja", "pizza", "coffee", "music", "soccer", "ball", "team", "friend", "sweet", "heart",
];

/// 2 points if the password contains a common word (case-insensitive).
pub fn dictionary_section(password: &str) -> SectionScore {
    let lower = password.to_lowercase();
    if COMMON_WORDS.iter().any(|word| lower.contains(word)) {
        2
    } else {
        0
    }
}

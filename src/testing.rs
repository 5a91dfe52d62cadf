//! Test helpers.

use rand::{Rng, RngCore};

use crate::charset::{CharacterPool, classify};
use crate::config::GenerationConfig;

/// RNG that always returns the same word.
///
/// `random::<f64>()` uses the top 53 bits, so `FixedRng::unit(0.5)` yields 0.5.
pub struct FixedRng(pub u64);

impl FixedRng {
    /// RNG whose `f64` draws all equal `value` (in `[0, 1)`).
    pub fn unit(value: f64) -> Self {
        let mantissa = (value * (1u64 << 53) as f64) as u64;
        FixedRng(mantissa << 11)
    }
}

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        (self.0 >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for (i, byte) in dst.iter_mut().enumerate() {
            *byte = (self.0 >> ((i % 8) * 8)) as u8;
        }
    }
}

/// Random valid config: length in `6..=30`, at least one category, random exclusions.
pub fn random_config<R: Rng>(rng: &mut R) -> GenerationConfig {
    loop {
        let config = GenerationConfig {
            length: rng.random_range(6..=30),
            include_uppercase: rng.random(),
            include_lowercase: rng.random(),
            include_numbers: rng.random(),
            include_symbols: rng.random(),
            avoid_similar: rng.random(),
            avoid_ambiguous: rng.random(),
        };
        if config.has_any_category() {
            return config;
        }
    }
}

/// Asserts exact length, pool membership, and per-category minimums.
pub fn assert_satisfies_config(text: &str, config: &GenerationConfig) {
    let pool = CharacterPool::build(config).unwrap();
    let chars: Vec<char> = text.chars().collect();
    assert_eq!(chars.len(), config.length, "{:?} for {:?}", text, config);
    assert!(
        chars.iter().all(|c| pool.contains(*c)),
        "leaked char in {:?} for {:?}",
        text,
        config
    );
    for category in pool.categories() {
        let count = chars.iter().filter(|c| classify(**c) == category).count();
        assert!(
            count >= category.minimum_count(),
            "{:?} has {} {:?} for {:?}",
            text,
            count,
            category,
            config
        );
    }
}

//! Security estimator - entropy, cracking time, and strength labels.
//!
//! The estimate is a heuristic upper bound: `length * log2(alphabet)`, where
//! the alphabet is widened to the represented categories' full size for
//! low-diversity passwords.

use std::collections::HashSet;
use std::fmt;

use crate::charset::{Category, classify};

/// Worst-case attacker speed, in guesses per second.
pub const ATTEMPTS_PER_SECOND: f64 = 1e12;
/// Entropy needed for compliance.
pub const SECURE_ENTROPY_BITS: f64 = 60.0;
/// Cracking time needed for compliance.
pub const SECURE_CRACK_YEARS: f64 = 10.0;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_YEAR: f64 = 365.25 * SECONDS_PER_DAY;

/// Below this many distinct characters the theoretical alphabet is considered.
const OBSERVED_ALPHABET_THRESHOLD: usize = 26;

/// Estimated entropy in bits.
///
/// An empty password has zero entropy.
pub fn entropy(password: &str) -> f64 {
    let length = password.chars().count();
    if length == 0 {
        return 0.0;
    }

    let distinct: HashSet<char> = password.chars().collect();
    let observed = distinct.len();

    let effective = if observed < OBSERVED_ALPHABET_THRESHOLD {
        let represented: HashSet<Category> = distinct.iter().map(|c| classify(*c)).collect();
        let theoretical: usize = represented.iter().map(|cat| cat.theoretical_size()).sum();
        observed.max(theoretical)
    } else {
        observed
    };

    length as f64 * (effective as f64).log2()
}

/// Time needed to exhaust `2^entropy` guesses at [`ATTEMPTS_PER_SECOND`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CrackTime {
    pub seconds: f64,
    pub minutes: f64,
    pub hours: f64,
    pub days: f64,
    pub years: f64,
}

impl CrackTime {
    /// Converts seconds into every unit. Non-finite input saturates to `f64::MAX`.
    pub fn from_seconds(seconds: f64) -> Self {
        let seconds = saturate(seconds);
        Self {
            seconds,
            minutes: seconds / SECONDS_PER_MINUTE,
            hours: seconds / SECONDS_PER_HOUR,
            days: seconds / SECONDS_PER_DAY,
            years: seconds / SECONDS_PER_YEAR,
        }
    }
}

/// Cracking time for a given entropy.
pub fn time_to_crack(entropy: f64) -> CrackTime {
    if entropy.is_nan() || entropy <= 0.0 {
        return CrackTime::from_seconds(1.0 / ATTEMPTS_PER_SECOND);
    }
    // 2^entropy / rate, computed in log space so large entropies saturate
    // instead of overflowing the intermediate combination count.
    let seconds = (entropy - ATTEMPTS_PER_SECOND.log2()).exp2();
    CrackTime::from_seconds(seconds)
}

fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else if value.is_infinite() {
        f64::MAX
    } else {
        value
    }
}

/// Qualitative label for an entropy value.
///
/// `Strong` covers 50..60 bits, so a `Strong` password is still below the
/// compliance threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Average,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    pub fn from_entropy(entropy: f64) -> Self {
        if entropy < 30.0 {
            StrengthLabel::VeryWeak
        } else if entropy < 40.0 {
            StrengthLabel::Weak
        } else if entropy < 50.0 {
            StrengthLabel::Average
        } else if entropy < 60.0 {
            StrengthLabel::Strong
        } else {
            StrengthLabel::VeryStrong
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Average => "Average",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        };
        f.write_str(label)
    }
}

/// Full estimate for one password.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SecurityEstimate {
    pub entropy: f64,
    pub crack_time: CrackTime,
    pub strength: StrengthLabel,
}

impl SecurityEstimate {
    /// Meets both the entropy and the cracking-time threshold.
    pub fn is_compliant(&self) -> bool {
        self.entropy >= SECURE_ENTROPY_BITS && self.crack_time.years >= SECURE_CRACK_YEARS
    }
}

pub fn estimate(password: &str) -> SecurityEstimate {
    let entropy = entropy(password);
    SecurityEstimate {
        entropy,
        crack_time: time_to_crack(entropy),
        strength: StrengthLabel::from_entropy(entropy),
    }
}

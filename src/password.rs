//! Generated password value and the generator trait.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::security::{CrackTime, SecurityEstimate, StrengthLabel, estimate};

/// Which generator produced a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GenerationMethod {
    Heuristic,
    Markov,
}

impl fmt::Display for GenerationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationMethod::Heuristic => f.write_str("heuristic"),
            GenerationMethod::Markov => f.write_str("markov"),
        }
    }
}

/// A password and its security estimate. Immutable once created.
///
/// The password itself is kept behind [`SecretString`]; `Debug` output
/// is redacted.
#[derive(Debug)]
pub struct GeneratedPassword {
    password: SecretString,
    estimate: SecurityEstimate,
    method: GenerationMethod,
}

impl GeneratedPassword {
    /// Scores `password` and wraps it.
    pub fn new(password: String, method: GenerationMethod) -> Self {
        let estimate = estimate(&password);
        Self {
            password: SecretString::new(password.into()),
            estimate,
            method,
        }
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }

    /// Number of characters (not bytes).
    pub fn len(&self) -> usize {
        self.password.expose_secret().chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.password.expose_secret().is_empty()
    }

    pub fn entropy(&self) -> f64 {
        self.estimate.entropy
    }

    pub fn crack_time(&self) -> &CrackTime {
        &self.estimate.crack_time
    }

    pub fn strength(&self) -> StrengthLabel {
        self.estimate.strength
    }

    pub fn estimate(&self) -> &SecurityEstimate {
        &self.estimate
    }

    pub fn method(&self) -> GenerationMethod {
        self.method
    }
}

/// Common interface of the Markov and heuristic generators.
pub trait PasswordGenerator {
    fn method(&self) -> GenerationMethod;

    /// Generates one password of exactly `config.length` characters.
    ///
    /// Only fails for an invalid config or an untrained model; once
    /// generation starts it always completes.
    fn generate(&mut self, config: &GenerationConfig) -> Result<GeneratedPassword, GenerationError>;

    /// Generates `count` passwords in order.
    fn generate_batch(
        &mut self,
        config: &GenerationConfig,
        count: usize,
    ) -> Result<Vec<GeneratedPassword>, GenerationError> {
        config.validate()?;
        (0..count).map(|_| self.generate(config)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_password_scores_on_creation() {
        let pwd = GeneratedPassword::new("aaaa".to_string(), GenerationMethod::Markov);
        assert_eq!(pwd.len(), 4);
        assert!(!pwd.is_empty());
        assert!((pwd.entropy() - 4.0 * 26f64.log2()).abs() < 1e-9);
        assert_eq!(pwd.strength(), StrengthLabel::VeryWeak);
        assert_eq!(pwd.method(), GenerationMethod::Markov);
        assert_eq!(pwd.password().expose_secret(), "aaaa");
    }

    #[test]
    fn test_debug_output_is_redacted() {
        let pwd = GeneratedPassword::new("hunter2!".to_string(), GenerationMethod::Heuristic);
        let debug = format!("{:?}", pwd);
        assert!(!debug.contains("hunter2!"));
    }

    #[test]
    fn test_method_display() {
        assert_eq!(GenerationMethod::Heuristic.to_string(), "heuristic");
        assert_eq!(GenerationMethod::Markov.to_string(), "markov");
    }
}

//! Error types for password generation.

use thiserror::Error;

/// Errors raised by pool construction, training, and generation.
///
/// All variants are terminal for the operation that raised them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Invalid generation config: {0}")]
    Configuration(String),
    #[error("Markov model has no trained states")]
    UntrainedModel,
    #[error("Training corpus contains no passwords")]
    EmptyCorpus,
}

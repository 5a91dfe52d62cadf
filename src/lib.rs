//! Password generation and comparison library
//!
//! This library synthesizes candidate passwords with two competing
//! strategies and compares their strength statistically:
//!
//! - a Markov chain trained on real passwords ([`MarkovGenerator`])
//! - uniform random draws repaired by pattern heuristics ([`HeuristicGenerator`])
//!
//! Every password is scored by the same entropy/cracking-time estimator,
//! and [`compare`] reduces two batches into a weighted verdict.
//!
//! # Features
//!
//! - `async` (default): Enables streaming batch generation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `parallel`: Enables rayon batch generation
//! - `serde`: Derives `Serialize` on statistics and comparison results
//!
//! # Environment Variables
//!
//! - `PWD_CORPUS_PATH`: Custom path to the training corpus
//!   (default: `./assets/training-corpus.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_forge::{
//!     compare, load_corpus, GenerationConfig, HeuristicGenerator, MarkovGenerator,
//!     PasswordGenerator, DEFAULT_ORDER,
//! };
//!
//! let corpus = load_corpus().expect("Failed to load corpus");
//!
//! let mut markov = MarkovGenerator::new();
//! markov.train(&corpus, DEFAULT_ORDER).expect("Failed to train model");
//! let mut heuristic = HeuristicGenerator::new();
//!
//! let config = GenerationConfig::default();
//! let random_batch = heuristic.generate_batch(&config, 100).unwrap();
//! let markov_batch = markov.generate_batch(&config, 100).unwrap();
//!
//! let result = compare(&random_batch, &markov_batch);
//! println!("Winner: {} ({:.1} vs {:.1})", result.winner, result.random_score, result.markov_score);
//! ```

mod charset;
mod comparison;
mod config;
mod corpus;
mod error;
mod heuristic;
mod markov;
mod password;
mod readability;
mod repair;
mod security;

#[cfg(any(feature = "async", feature = "parallel"))]
mod batch;

#[cfg(test)]
mod testing;

// Public API
pub use charset::{
    AMBIGUOUS_CHARS, Category, CharacterPool, LOWERCASE, NUMBERS, SIMILAR_CHARS, SYMBOLS,
    UPPERCASE, classify,
};
pub use comparison::{
    BatchKind, BatchStatistics, ComparisonResult, Distribution, Metric, MetricComparison,
    compare, compare_statistics,
};
pub use config::GenerationConfig;
pub use corpus::{CORPUS_PATH_ENV, CorpusError, corpus_path, load_corpus, load_corpus_from_path};
pub use error::GenerationError;
pub use heuristic::HeuristicGenerator;
pub use markov::{DEFAULT_ORDER, MarkovGenerator, MarkovModel};
pub use password::{GeneratedPassword, GenerationMethod, PasswordGenerator};
pub use readability::{MAX_READABILITY_SCORE, readability_score};
pub use security::{
    ATTEMPTS_PER_SECOND, CrackTime, SECURE_CRACK_YEARS, SECURE_ENTROPY_BITS, SecurityEstimate,
    StrengthLabel, entropy, estimate, time_to_crack,
};

#[cfg(feature = "async")]
pub use batch::generate_batch_tx;

#[cfg(feature = "parallel")]
pub use batch::generate_batch_par;

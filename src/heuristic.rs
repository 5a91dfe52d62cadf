//! Heuristic random generator - uniform draws followed by pattern repair.

use rand::Rng;
use rand::rngs::ThreadRng;

use crate::charset::CharacterPool;
use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::password::{GeneratedPassword, GenerationMethod, PasswordGenerator};
use crate::repair::{self, RepairContext, RepairStep};

/// Samples uniformly from the allowed pool, then breaks predictable patterns.
pub struct HeuristicGenerator<R = ThreadRng> {
    rng: R,
}

impl HeuristicGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for HeuristicGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> HeuristicGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// `config.length` independent uniform draws from the pool.
    pub fn generate_base(&mut self, config: &GenerationConfig, pool: &CharacterPool) -> Vec<char> {
        (0..config.length).map(|_| pool.sample(&mut self.rng)).collect()
    }

    /// Repairs a raw password.
    ///
    /// Category counts are fixed first; the pattern steps only substitute
    /// within a category, so they keep those counts intact.
    pub fn apply_heuristics(
        &mut self,
        mut password: Vec<char>,
        config: &GenerationConfig,
        pool: &CharacterPool,
    ) -> Vec<char> {
        let ctx = RepairContext {
            pool,
            target_length: config.length,
        };
        let steps: Vec<(&str, RepairStep<R>)> = vec![
            ("categories", repair::ensure_categories),
            ("minimums", repair::enforce_minimums),
            ("repeats", repair::break_repeats),
            ("sequences", repair::break_sequences),
            ("entropy_floor", repair::extend_to_minimum_length),
        ];
        repair::run_steps(&mut password, &ctx, &steps, &mut self.rng);
        password
    }
}

impl<R: Rng> PasswordGenerator for HeuristicGenerator<R> {
    fn method(&self) -> GenerationMethod {
        GenerationMethod::Heuristic
    }

    fn generate(&mut self, config: &GenerationConfig) -> Result<GeneratedPassword, GenerationError> {
        let pool = CharacterPool::build(config)?;
        let base = self.generate_base(config, &pool);
        let password = self.apply_heuristics(base, config, &pool);
        Ok(GeneratedPassword::new(
            password.into_iter().collect(),
            GenerationMethod::Heuristic,
        ))
    }
}

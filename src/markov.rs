//! Markov chain model - training, inverse-CDF sampling, and generation.
//!
//! States are fixed-length substrings of `order` characters; every
//! transition emits one next character. Maps are ordered so that sampling
//! walks states in a deterministic order.

use std::collections::BTreeMap;
use std::sync::Arc;

use rand::Rng;
use rand::rngs::ThreadRng;

use crate::charset::CharacterPool;
use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::password::{GeneratedPassword, GenerationMethod, PasswordGenerator};
use crate::repair::{self, RepairContext, RepairStep};

/// Default state length.
pub const DEFAULT_ORDER: usize = 1;

/// Trained transition table. Read-only after training.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkovModel {
    order: usize,
    transitions: BTreeMap<String, BTreeMap<char, f64>>,
    start_states: BTreeMap<String, f64>,
    trained_on: usize,
}

impl Default for MarkovModel {
    fn default() -> Self {
        Self {
            order: DEFAULT_ORDER,
            transitions: BTreeMap::new(),
            start_states: BTreeMap::new(),
            trained_on: 0,
        }
    }
}

impl MarkovModel {
    /// Builds a model from a corpus.
    ///
    /// Passwords shorter than `order + 1` characters are skipped. A corpus
    /// where every password is skipped yields an empty model, which fails
    /// generation with [`GenerationError::UntrainedModel`].
    ///
    /// # Errors
    ///
    /// - `EmptyCorpus` if the corpus has no passwords at all
    /// - `Configuration` if `order` is zero
    pub fn train<S: AsRef<str>>(corpus: &[S], order: usize) -> Result<Self, GenerationError> {
        if order == 0 {
            return Err(GenerationError::Configuration(
                "Markov order must be at least 1".to_string(),
            ));
        }
        if corpus.is_empty() {
            return Err(GenerationError::EmptyCorpus);
        }

        let mut transition_counts: BTreeMap<String, BTreeMap<char, usize>> = BTreeMap::new();
        let mut start_counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut trained_on = 0;

        for password in corpus {
            let chars: Vec<char> = password.as_ref().chars().collect();
            if chars.len() < order + 1 {
                continue;
            }
            trained_on += 1;

            let start: String = chars[..order].iter().collect();
            *start_counts.entry(start).or_insert(0) += 1;

            for window in chars.windows(order + 1) {
                let state: String = window[..order].iter().collect();
                *transition_counts
                    .entry(state)
                    .or_default()
                    .entry(window[order])
                    .or_insert(0) += 1;
            }
        }

        let transitions = transition_counts
            .into_iter()
            .map(|(state, counts)| (state, normalize(counts)))
            .collect();
        let start_states = normalize(start_counts);

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Markov model trained: {} of {} passwords, order {}",
            trained_on,
            corpus.len(),
            order
        );

        Ok(Self {
            order,
            transitions,
            start_states,
            trained_on,
        })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of corpus passwords that contributed observations.
    pub fn trained_on(&self) -> usize {
        self.trained_on
    }

    pub fn is_trained(&self) -> bool {
        !self.start_states.is_empty()
    }

    pub fn transitions(&self) -> &BTreeMap<String, BTreeMap<char, f64>> {
        &self.transitions
    }

    pub fn start_states(&self) -> &BTreeMap<String, f64> {
        &self.start_states
    }

    /// Samples a start state. `None` only for an untrained model.
    pub fn select_start_state<R: Rng>(&self, rng: &mut R) -> Option<&str> {
        let draw: f64 = rng.random();
        sample_categorical(&self.start_states, draw).map(String::as_str)
    }

    /// Samples the character following `state`.
    ///
    /// `None` means the state is a dead end, which ends the chain normally.
    pub fn select_next_char<R: Rng>(&self, state: &str, rng: &mut R) -> Option<char> {
        let distribution = self.transitions.get(state)?;
        let draw: f64 = rng.random();
        sample_categorical(distribution, draw).copied()
    }
}

fn normalize<K: Ord>(counts: BTreeMap<K, usize>) -> BTreeMap<K, f64> {
    let total: usize = counts.values().sum();
    if total == 0 {
        return BTreeMap::new();
    }
    counts
        .into_iter()
        .map(|(key, count)| (key, count as f64 / total as f64))
        .collect()
}

/// Inverse-CDF draw: the first key whose cumulative mass reaches `draw`.
/// Falls back to the first key when rounding leaves the draw uncovered.
fn sample_categorical<K>(distribution: &BTreeMap<K, f64>, draw: f64) -> Option<&K> {
    let mut cumulative = 0.0;
    for (key, probability) in distribution {
        cumulative += probability;
        if cumulative >= draw {
            return Some(key);
        }
    }

    #[cfg(feature = "tracing")]
    {
        if !distribution.is_empty() {
            tracing::warn!("cumulative probability {} below draw {}, using first state", cumulative, draw);
        }
    }

    distribution.keys().next()
}

/// Generator backed by a shared, read-only [`MarkovModel`].
///
/// The random source is injected at construction so tests can substitute a
/// deterministic one.
pub struct MarkovGenerator<R = ThreadRng> {
    model: Arc<MarkovModel>,
    rng: R,
}

impl MarkovGenerator<ThreadRng> {
    /// Untrained generator using the thread-local RNG.
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for MarkovGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MarkovGenerator<R> {
    /// Untrained generator with the given RNG.
    pub fn with_rng(rng: R) -> Self {
        Self {
            model: Arc::new(MarkovModel::default()),
            rng,
        }
    }

    /// Generator over an already trained model.
    pub fn from_model(model: Arc<MarkovModel>, rng: R) -> Self {
        Self { model, rng }
    }

    /// Replaces the model with one trained on `corpus`.
    ///
    /// The previous model is discarded even when training fails.
    /// Returns the number of passwords that contributed observations.
    pub fn train<S: AsRef<str>>(&mut self, corpus: &[S], order: usize) -> Result<usize, GenerationError> {
        match MarkovModel::train(corpus, order) {
            Ok(model) => {
                let trained_on = model.trained_on();
                self.model = Arc::new(model);
                Ok(trained_on)
            }
            Err(e) => {
                self.model = Arc::new(MarkovModel::default());
                Err(e)
            }
        }
    }

    pub fn model(&self) -> &Arc<MarkovModel> {
        &self.model
    }

    /// Samples a raw password from the chain.
    ///
    /// After the start state, each step conditions on the last `order`
    /// characters. A dead-end state stops the walk and the rest is padded
    /// with uniform draws from `pool`.
    ///
    /// # Arguments
    /// * `config` - Supplies the target length
    /// * `pool` - Characters used for padding
    ///
    /// # Returns
    /// Exactly `config.length` characters. They may still fall outside the
    /// pool; [`post_process`](Self::post_process) fixes that.
    ///
    /// # Errors
    ///
    /// Returns `UntrainedModel` if the model has no start states.
    pub fn generate_base(
        &mut self,
        config: &GenerationConfig,
        pool: &CharacterPool,
    ) -> Result<Vec<char>, GenerationError> {
        let model = &self.model;
        let rng = &mut self.rng;

        let start = model
            .select_start_state(rng)
            .ok_or(GenerationError::UntrainedModel)?;
        let mut password: Vec<char> = start.chars().collect();
        let order = model.order();

        while password.len() < config.length {
            let state: String = password[password.len() - order..].iter().collect();
            match model.select_next_char(&state, rng) {
                Some(next) => password.push(next),
                None => break,
            }
        }

        if password.len() < config.length {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "dead-end state after {} chars, padding to {}",
                password.len(),
                config.length
            );
            while password.len() < config.length {
                password.push(pool.sample(rng));
            }
        }

        password.truncate(config.length);
        Ok(password)
    }

    /// Forces a sampled password into the config's constraints.
    ///
    /// # Arguments
    /// * `password` - Output of [`generate_base`](Self::generate_base)
    /// * `config` - Length and category settings to enforce
    /// * `pool` - Allowed characters, built from `config`
    ///
    /// # Returns
    /// A password of `config.length` pool characters containing every
    /// enabled category, with at least two symbols and two numbers when
    /// those are enabled and the length allows it.
    pub fn post_process(
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
            ("sanitize", repair::sanitize),
            ("categories", repair::ensure_categories),
            ("minimums", repair::enforce_minimums),
            ("entropy_floor", repair::extend_to_target_length),
        ];
        repair::run_steps(&mut password, &ctx, &steps, &mut self.rng);
        password
    }
}

impl<R: Rng> PasswordGenerator for MarkovGenerator<R> {
    fn method(&self) -> GenerationMethod {
        GenerationMethod::Markov
    }

    fn generate(&mut self, config: &GenerationConfig) -> Result<GeneratedPassword, GenerationError> {
        let pool = CharacterPool::build(config)?;
        let base = self.generate_base(config, &pool)?;
        let password = self.post_process(base, config, &pool);
        Ok(GeneratedPassword::new(
            password.into_iter().collect(),
            GenerationMethod::Markov,
        ))
    }
}

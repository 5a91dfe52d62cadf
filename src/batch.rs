//! Batch generation - async streaming and parallel variants.
//!
//! The plain sequential batch lives on [`PasswordGenerator::generate_batch`].

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::password::{GeneratedPassword, PasswordGenerator};

/// Streams `count` passwords through `tx`.
///
/// Cancellation is checked before each password; generation also stops when
/// the receiver is dropped. Returns the number of passwords sent.
#[cfg(feature = "async")]
pub async fn generate_batch_tx<G: PasswordGenerator>(
    generator: &mut G,
    config: &GenerationConfig,
    count: usize,
    token: CancellationToken,
    tx: mpsc::Sender<GeneratedPassword>,
) -> Result<usize, GenerationError> {
    config.validate()?;

    #[cfg(feature = "tracing")]
    tracing::info!("{} batch of {} is about to start...", generator.method(), count);

    let mut sent = 0;
    for _ in 0..count {
        if token.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::info!("batch cancelled after {} passwords", sent);
            break;
        }

        let password = generator.generate(config)?;
        if let Err(_e) = tx.send(password).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send generated password: {}", _e);
            break;
        }
        sent += 1;

        tokio::task::yield_now().await;
    }

    Ok(sent)
}

/// Generates `count` passwords across the rayon pool.
///
/// `make_generator` runs once per worker split; generators never share an
/// RNG. Markov generators should share one `Arc<MarkovModel>`.
#[cfg(feature = "parallel")]
pub fn generate_batch_par<G, F>(
    make_generator: F,
    config: &GenerationConfig,
    count: usize,
) -> Result<Vec<GeneratedPassword>, GenerationError>
where
    G: PasswordGenerator,
    F: Fn() -> G + Sync + Send,
{
    use rayon::prelude::*;

    config.validate()?;
    (0..count)
        .into_par_iter()
        .map_init(make_generator, |generator, _| generator.generate(config))
        .collect()
}

#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use crate::heuristic::HeuristicGenerator;
    use crate::markov::MarkovGenerator;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[tokio::test]
    async fn test_generate_batch_tx_sends_all() {
        let (tx, mut rx) = mpsc::channel(32);
        let mut generator = HeuristicGenerator::with_rng(StdRng::seed_from_u64(1));
        let config = GenerationConfig::default();

        let sent = generate_batch_tx(&mut generator, &config, 10, CancellationToken::new(), tx)
            .await
            .unwrap();
        assert_eq!(sent, 10);

        let mut received = 0;
        while let Some(pwd) = rx.recv().await {
            assert_eq!(pwd.len(), 16);
            received += 1;
        }
        assert_eq!(received, 10);
    }

    #[tokio::test]
    async fn test_generate_batch_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(8);
        let token = CancellationToken::new();
        token.cancel();
        let mut generator = HeuristicGenerator::with_rng(StdRng::seed_from_u64(2));

        let sent = generate_batch_tx(&mut generator, &GenerationConfig::default(), 5, token, tx)
            .await
            .unwrap();
        assert_eq!(sent, 0);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_generate_batch_tx_receiver_dropped() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let mut generator = HeuristicGenerator::with_rng(StdRng::seed_from_u64(3));

        let sent = generate_batch_tx(
            &mut generator,
            &GenerationConfig::default(),
            5,
            CancellationToken::new(),
            tx,
        )
        .await
        .unwrap();
        assert_eq!(sent, 0);
    }

    #[tokio::test]
    async fn test_generate_batch_tx_untrained() {
        let (tx, _rx) = mpsc::channel(1);
        let mut generator = MarkovGenerator::with_rng(StdRng::seed_from_u64(4));

        let result = generate_batch_tx(
            &mut generator,
            &GenerationConfig::default(),
            3,
            CancellationToken::new(),
            tx,
        )
        .await;
        assert_eq!(result, Err(GenerationError::UntrainedModel));
    }
}

#[cfg(all(test, feature = "parallel"))]
mod parallel_tests {
    use super::*;
    use crate::markov::{MarkovGenerator, MarkovModel};
    use std::sync::Arc;

    #[test]
    fn test_generate_batch_par_shares_model() {
        let model = Arc::new(MarkovModel::train(&["password123", "letmein42", "dragon99"], 1).unwrap());
        let config = GenerationConfig::default();

        let batch = generate_batch_par(
            || MarkovGenerator::from_model(Arc::clone(&model), rand::rng()),
            &config,
            64,
        )
        .unwrap();

        assert_eq!(batch.len(), 64);
        assert!(batch.iter().all(|pwd| pwd.len() == 16));
    }

    #[test]
    fn test_generate_batch_par_untrained() {
        let model = Arc::new(MarkovModel::default());
        let result = generate_batch_par(
            || MarkovGenerator::from_model(Arc::clone(&model), rand::rng()),
            &GenerationConfig::default(),
            4,
        );
        assert!(matches!(result, Err(GenerationError::UntrainedModel)));
    }
}

//! Comparison engine - per-batch statistics, per-metric verdicts, and an
//! overall weighted score.
//!
//! The heuristic batch is always the first-named batch ("random") and wins
//! every exact tie.

use std::fmt;

use secrecy::ExposeSecret;

use crate::password::GeneratedPassword;
use crate::readability::{MAX_READABILITY_SCORE, readability_score};
use crate::security::{SECURE_CRACK_YEARS, SECURE_ENTROPY_BITS};

/// Points available per scoring axis; four axes make 100.
const POINTS_PER_AXIS: f64 = 25.0;

/// Summary of one numeric series.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Distribution {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation; zero for fewer than two values.
    pub std_dev: f64,
}

impl Distribution {
    /// Summarizes `values`. An empty series yields all zeros.
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        // running mean so saturated values cannot overflow the sum
        let mut mean = 0.0;
        for (i, value) in sorted.iter().enumerate() {
            mean += (value - mean) / (i + 1) as f64;
        }

        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            sorted[mid - 1] / 2.0 + sorted[mid] / 2.0
        } else {
            sorted[mid]
        };

        let std_dev = if sorted.len() < 2 {
            0.0
        } else {
            let squares: f64 = sorted.iter().map(|value| (value - mean).powi(2)).sum();
            let deviation = (squares / (sorted.len() - 1) as f64).sqrt();
            if deviation.is_finite() { deviation } else { f64::MAX }
        };

        Self {
            mean,
            median,
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            std_dev,
        }
    }
}

/// Aggregate metrics for one batch of generated passwords.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BatchStatistics {
    pub count: usize,
    pub entropy: Distribution,
    pub crack_years: Distribution,
    /// Mean readability points per password (0 to 6).
    pub readability: f64,
    /// Percentage (0-100) with entropy of at least 60 bits.
    pub entropy_compliance: f64,
    /// Percentage (0-100) with cracking time of at least 10 years.
    pub crack_time_compliance: f64,
    /// Percentage (0-100) meeting both requirements.
    pub full_compliance: f64,
}

fn percentage(matching: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        matching as f64 * 100.0 / total as f64
    }
}

impl BatchStatistics {
    /// Reduces a batch to its statistics. An empty batch yields zeroed
    /// distributions and 0% compliance.
    pub fn from_batch(batch: &[GeneratedPassword]) -> Self {
        let count = batch.len();
        if count == 0 {
            return Self::default();
        }

        let entropies: Vec<f64> = batch.iter().map(GeneratedPassword::entropy).collect();
        let years: Vec<f64> = batch.iter().map(|pwd| pwd.crack_time().years).collect();

        let readability_total: u32 = batch
            .iter()
            .map(|pwd| u32::from(readability_score(pwd.password().expose_secret())))
            .sum();

        let strong_entropy = |pwd: &&GeneratedPassword| pwd.entropy() >= SECURE_ENTROPY_BITS;
        let slow_to_crack = |pwd: &&GeneratedPassword| pwd.crack_time().years >= SECURE_CRACK_YEARS;

        let entropy_ok = batch.iter().filter(strong_entropy).count();
        let crack_ok = batch.iter().filter(slow_to_crack).count();
        let both_ok = batch
            .iter()
            .filter(|pwd| strong_entropy(pwd) && slow_to_crack(pwd))
            .count();

        Self {
            count,
            entropy: Distribution::from_values(&entropies),
            crack_years: Distribution::from_values(&years),
            readability: f64::from(readability_total) / count as f64,
            entropy_compliance: percentage(entropy_ok, count),
            crack_time_compliance: percentage(crack_ok, count),
            full_compliance: percentage(both_ok, count),
        }
    }

    /// Weighted score out of 100: entropy, cracking time, readability, and
    /// full compliance each contribute at most 25 points.
    pub fn overall_score(&self) -> f64 {
        let entropy = (self.entropy.mean / SECURE_ENTROPY_BITS).clamp(0.0, 1.0);
        let crack = (self.crack_years.mean / SECURE_CRACK_YEARS).clamp(0.0, 1.0);
        let readability = (self.readability / f64::from(MAX_READABILITY_SCORE)).clamp(0.0, 1.0);
        let compliance = (self.full_compliance / 100.0).clamp(0.0, 1.0);
        (entropy + crack + readability + compliance) * POINTS_PER_AXIS
    }
}

/// One side of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BatchKind {
    /// Heuristic random generator; first-named, wins ties.
    Random,
    Markov,
}

impl BatchKind {
    /// `Markov` only if strictly greater.
    fn better(random: f64, markov: f64) -> Self {
        if markov > random {
            BatchKind::Markov
        } else {
            BatchKind::Random
        }
    }
}

impl fmt::Display for BatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchKind::Random => f.write_str("random"),
            BatchKind::Markov => f.write_str("markov"),
        }
    }
}

/// Compared metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Metric {
    EntropyMean,
    CrackTimeMean,
    ReadabilityMean,
    FullCompliance,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::EntropyMean,
        Metric::CrackTimeMean,
        Metric::ReadabilityMean,
        Metric::FullCompliance,
    ];

    fn value(self, stats: &BatchStatistics) -> f64 {
        match self {
            Metric::EntropyMean => stats.entropy.mean,
            Metric::CrackTimeMean => stats.crack_years.mean,
            Metric::ReadabilityMean => stats.readability,
            Metric::FullCompliance => stats.full_compliance,
        }
    }
}

/// Per-metric verdict.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MetricComparison {
    pub metric: Metric,
    pub random: f64,
    pub markov: f64,
    /// `markov - random`.
    pub difference: f64,
    pub better: BatchKind,
}

impl MetricComparison {
    fn new(metric: Metric, random: &BatchStatistics, markov: &BatchStatistics) -> Self {
        let random_value = metric.value(random);
        let markov_value = metric.value(markov);
        let difference = markov_value - random_value;
        Self {
            metric,
            random: random_value,
            markov: markov_value,
            difference: if difference.is_nan() { 0.0 } else { difference },
            better: BatchKind::better(random_value, markov_value),
        }
    }
}

/// Full comparison of a heuristic batch against a Markov batch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComparisonResult {
    pub random: BatchStatistics,
    pub markov: BatchStatistics,
    pub metrics: Vec<MetricComparison>,
    pub random_score: f64,
    pub markov_score: f64,
    pub winner: BatchKind,
}

impl ComparisonResult {
    pub fn metric(&self, metric: Metric) -> Option<&MetricComparison> {
        self.metrics.iter().find(|m| m.metric == metric)
    }
}

/// Compares a heuristic ("random") batch against a Markov batch.
///
/// # Arguments
/// * `random` - Passwords from the heuristic generator
/// * `markov` - Passwords from the Markov generator
///
/// # Returns
/// A `ComparisonResult` with both batch statistics, one comparison per
/// metric, and the overall winner. Exact ties go to the random batch.
pub fn compare(random: &[GeneratedPassword], markov: &[GeneratedPassword]) -> ComparisonResult {
    compare_statistics(
        BatchStatistics::from_batch(random),
        BatchStatistics::from_batch(markov),
    )
}

/// Compares precomputed statistics.
///
/// # Arguments
/// * `random` - Statistics of the heuristic batch
/// * `markov` - Statistics of the Markov batch
///
/// # Returns
/// A `ComparisonResult` holding both inputs, the per-metric differences
/// (`markov - random`), and both overall scores.
pub fn compare_statistics(random: BatchStatistics, markov: BatchStatistics) -> ComparisonResult {
    let metrics = Metric::ALL
        .into_iter()
        .map(|metric| MetricComparison::new(metric, &random, &markov))
        .collect();

    let random_score = random.overall_score();
    let markov_score = markov.overall_score();
    let winner = BatchKind::better(random_score, markov_score);

    #[cfg(feature = "tracing")]
    tracing::info!(
        "comparison done: random {:.1} vs markov {:.1}, winner {}",
        random_score,
        markov_score,
        winner
    );

    ComparisonResult {
        random,
        markov,
        metrics,
        random_score,
        markov_score,
        winner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::GenerationMethod;

    fn batch(passwords: &[&str], method: GenerationMethod) -> Vec<GeneratedPassword> {
        passwords
            .iter()
            .map(|p| GeneratedPassword::new(p.to_string(), method))
            .collect()
    }

    #[test]
    fn test_distribution_basic() {
        let dist = Distribution::from_values(&[4.0, 1.0, 3.0, 2.0]);
        assert!((dist.mean - 2.5).abs() < 1e-12);
        assert!((dist.median - 2.5).abs() < 1e-12);
        assert_eq!(dist.min, 1.0);
        assert_eq!(dist.max, 4.0);
        // sample variance = 5/3
        assert!((dist.std_dev - (5.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_distribution_edge_cases() {
        assert_eq!(Distribution::from_values(&[]), Distribution::default());
        let single = Distribution::from_values(&[7.0]);
        assert_eq!(single.mean, 7.0);
        assert_eq!(single.median, 7.0);
        assert_eq!(single.std_dev, 0.0);
    }

    #[test]
    fn test_distribution_saturated_values() {
        let dist = Distribution::from_values(&[f64::MAX, f64::MAX, 1.0]);
        assert!(dist.mean.is_finite());
        assert!(dist.std_dev.is_finite());
        assert_eq!(dist.max, f64::MAX);
    }

    #[test]
    fn test_batch_statistics_compliance() {
        let stats = BatchStatistics::from_batch(&batch(
            &["aaaa", "Xq7#mP2$vL9!wR4%", "dragon12", "Zt5&Kc8*Hn3^Jb6("],
            GenerationMethod::Heuristic,
        ));
        assert_eq!(stats.count, 4);
        assert!((stats.entropy_compliance - 50.0).abs() < 1e-9);
        assert!((stats.crack_time_compliance - 50.0).abs() < 1e-9);
        assert!((stats.full_compliance - 50.0).abs() < 1e-9);
        assert!(stats.readability > 0.0 && stats.readability <= 6.0);
    }

    #[test]
    fn test_batch_statistics_empty() {
        let stats = BatchStatistics::from_batch(&[]);
        assert_eq!(stats, BatchStatistics::default());
        assert_eq!(stats.overall_score(), 0.0);
    }

    #[test]
    fn test_overall_score_caps_axes() {
        let stats = BatchStatistics {
            count: 1,
            entropy: Distribution {
                mean: 120.0,
                ..Distribution::default()
            },
            crack_years: Distribution {
                mean: 1e9,
                ..Distribution::default()
            },
            readability: 3.0,
            entropy_compliance: 100.0,
            crack_time_compliance: 100.0,
            full_compliance: 100.0,
        };
        assert!((stats.overall_score() - 87.5).abs() < 1e-9);
    }

    #[test]
    fn test_compare_self_is_tie() {
        let passwords = batch(
            &["Xq7#mP2$vL9!wR4%", "dragon12", "aaaa"],
            GenerationMethod::Heuristic,
        );
        let result = compare(&passwords, &passwords);
        assert_eq!(result.metrics.len(), 4);
        for comparison in &result.metrics {
            assert_eq!(comparison.difference, 0.0);
            assert_eq!(comparison.better, BatchKind::Random);
        }
        assert_eq!(result.random_score, result.markov_score);
        assert_eq!(result.winner, BatchKind::Random);
    }

    #[test]
    fn test_compare_markov_better() {
        let random = batch(&["aaaa", "bbbb"], GenerationMethod::Heuristic);
        let markov = batch(&["Xq7#mP2$vL9!wR4%", "Zt5&Kc8*Hn3^Jb6("], GenerationMethod::Markov);
        let result = compare(&random, &markov);
        let entropy = result.metric(Metric::EntropyMean).unwrap();
        assert!(entropy.difference > 0.0);
        assert_eq!(entropy.better, BatchKind::Markov);
        assert_eq!(result.metric(Metric::FullCompliance).unwrap().difference, 100.0);
        assert_eq!(result.winner, BatchKind::Markov);
        assert!(result.markov_score > result.random_score);
    }

    #[test]
    fn test_batch_kind_display() {
        assert_eq!(BatchKind::Random.to_string(), "random");
        assert_eq!(BatchKind::Markov.to_string(), "markov");
    }
}

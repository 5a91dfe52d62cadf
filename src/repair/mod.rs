//! Password repair steps
//!
//! Both generators run their raw output through a sequence of named steps.
//! Each step rewrites characters in place and never removes any; only the
//! entropy-floor steps may append, and never beyond the target length.

mod categories;
mod entropy_floor;
mod patterns;
mod sanitize;

pub use categories::{enforce_minimums, ensure_categories};
pub use entropy_floor::{extend_to_minimum_length, extend_to_target_length};
pub use patterns::{break_repeats, break_sequences};
pub use sanitize::sanitize;

#[cfg(test)]
pub use patterns::is_sequential;

use rand::Rng;

use crate::charset::CharacterPool;

/// Shared inputs of every repair step.
#[derive(Debug, Clone, Copy)]
pub struct RepairContext<'a> {
    pub pool: &'a CharacterPool,
    /// Hard length cap for both generators.
    pub target_length: usize,
}

/// A repair step rewrites the password in place.
pub type RepairStep<R> = fn(&mut Vec<char>, &RepairContext<'_>, &mut R);

/// Runs steps in order.
pub fn run_steps<R: Rng>(
    password: &mut Vec<char>,
    ctx: &RepairContext<'_>,
    steps: &[(&str, RepairStep<R>)],
    rng: &mut R,
) {
    for (_step_name, step_fn) in steps {
        #[cfg(feature = "tracing")]
        let before = password.len();

        step_fn(password, ctx, rng);

        #[cfg(feature = "tracing")]
        {
            tracing::trace!(
                "repair step '{}' done (length {} -> {})",
                _step_name,
                before,
                password.len()
            );
        }
    }
}

/// Picks a random candidate that is not in `avoid`, or any candidate if all are.
///
/// `candidates` must be non-empty.
fn pick_avoiding<R: Rng>(candidates: &[char], avoid: &[char], rng: &mut R) -> char {
    let allowed: Vec<char> = candidates
        .iter()
        .copied()
        .filter(|c| !avoid.contains(c))
        .collect();
    let choices: &[char] = if allowed.is_empty() { candidates } else { &allowed };
    choices[rng.random_range(0..choices.len())]
}

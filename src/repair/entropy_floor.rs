//! Entropy floor steps - lengthens low-entropy passwords up to the length cap.

use rand::Rng;

use super::RepairContext;
use crate::security::{SECURE_ENTROPY_BITS, entropy};

fn below_floor(password: &[char]) -> bool {
    let text: String = password.iter().collect();
    entropy(&text) < SECURE_ENTROPY_BITS
}

fn extend_to<R: Rng>(password: &mut Vec<char>, ctx: &RepairContext<'_>, length: usize, rng: &mut R) {
    let length = length.min(ctx.target_length);
    while password.len() < length {
        password.push(ctx.pool.sample(rng));
    }
}

/// Shortest length whose uniform draw from a pool of `pool_size` reaches
/// the entropy floor. `None` for pools too small to carry entropy.
pub fn minimum_length_for_floor(pool_size: usize) -> Option<usize> {
    if pool_size < 2 {
        return None;
    }
    Some((SECURE_ENTROPY_BITS / (pool_size as f64).log2()).ceil() as usize)
}

/// Appends pool characters up to the target length when below the floor.
pub fn extend_to_target_length<R: Rng>(password: &mut Vec<char>, ctx: &RepairContext<'_>, rng: &mut R) {
    if below_floor(password) {
        extend_to(password, ctx, ctx.target_length, rng);
    }
}

/// Appends pool characters up to the floor-derived minimum length when
/// below the floor, capped at the target length.
pub fn extend_to_minimum_length<R: Rng>(password: &mut Vec<char>, ctx: &RepairContext<'_>, rng: &mut R) {
    if below_floor(password) {
        let length = minimum_length_for_floor(ctx.pool.len()).unwrap_or(ctx.target_length);
        extend_to(password, ctx, length, rng);
    }
}

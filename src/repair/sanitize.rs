//! Sanitize step - replaces characters outside the allowed pool.

use rand::Rng;

use super::RepairContext;

/// Replaces every disallowed character with a uniform draw from the pool.
pub fn sanitize<R: Rng>(password: &mut Vec<char>, ctx: &RepairContext<'_>, rng: &mut R) {
    for c in password.iter_mut() {
        if !ctx.pool.contains(*c) {
            *c = ctx.pool.sample(rng);
        }
    }
}

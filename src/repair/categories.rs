//! Category steps - presence of every enabled category and minimum counts.

use rand::Rng;
use rand::seq::IndexedRandom;

use super::RepairContext;
use crate::charset::{Category, CharacterPool, classify};

/// Random probes before falling back to a linear scan for a safe donor.
const MAX_DONOR_PROBES: usize = 32;

/// Categories with a count minimum beyond plain presence.
const MINIMUM_COUNT_CATEGORIES: [Category; 2] = [Category::Symbols, Category::Numbers];

fn count_of(password: &[char], category: Category) -> usize {
    password.iter().filter(|c| classify(**c) == category).count()
}

/// Occurrences a category must keep; zero for disabled categories.
fn required(pool: &CharacterPool, category: Category) -> usize {
    if pool.has_category(category) {
        category.minimum_count()
    } else {
        0
    }
}

/// A donor position holds another category that stays at or above its own
/// requirement after losing one character.
fn is_safe_donor(password: &[char], index: usize, target: Category, pool: &CharacterPool) -> bool {
    let category = classify(password[index]);
    category != target && count_of(password, category) > required(pool, category)
}

/// Position to overwrite with a `target` character.
///
/// Bounded random search for a safe donor, then a linear scan, then any
/// position not already holding `target`.
fn pick_donor<R: Rng>(
    password: &[char],
    target: Category,
    pool: &CharacterPool,
    rng: &mut R,
) -> Option<usize> {
    if password.is_empty() {
        return None;
    }

    for _ in 0..MAX_DONOR_PROBES {
        let index = rng.random_range(0..password.len());
        if is_safe_donor(password, index, target, pool) {
            return Some(index);
        }
    }

    if let Some(index) = (0..password.len()).find(|&i| is_safe_donor(password, i, target, pool)) {
        return Some(index);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("no safe donor for {:?}, overwriting an arbitrary position", target);

    let others: Vec<usize> = (0..password.len())
        .filter(|&i| classify(password[i]) != target)
        .collect();
    others.choose(rng).copied()
}

/// Overwrites one position per enabled category that is missing entirely.
pub fn ensure_categories<R: Rng>(password: &mut Vec<char>, ctx: &RepairContext<'_>, rng: &mut R) {
    let missing: Vec<Category> = ctx
        .pool
        .categories()
        .filter(|cat| count_of(password, *cat) == 0)
        .collect();

    for category in missing {
        let Some(index) = pick_donor(password, category, ctx.pool, rng) else {
            break;
        };
        if let Some(replacement) = ctx.pool.sample_category(category, rng) {
            password[index] = replacement;
        }
    }
}

/// Raises enabled symbols and numbers to their minimum counts.
pub fn enforce_minimums<R: Rng>(password: &mut Vec<char>, ctx: &RepairContext<'_>, rng: &mut R) {
    for category in MINIMUM_COUNT_CATEGORIES {
        if !ctx.pool.has_category(category) {
            continue;
        }

        let needed = category.minimum_count();
        // every swap adds one `category` character, so this bounds the loop
        for _ in 0..password.len() {
            if count_of(password, category) >= needed {
                break;
            }
            let Some(index) = pick_donor(password, category, ctx.pool, rng) else {
                break;
            };
            let Some(replacement) = ctx.pool.sample_category(category, rng) else {
                break;
            };
            password[index] = replacement;
        }
    }
}

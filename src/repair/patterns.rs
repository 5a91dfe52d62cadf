//! Pattern steps - breaks repeated runs and short sequential runs.

use rand::Rng;
use rand::seq::IndexedRandom;

use super::{RepairContext, pick_avoiding};
use crate::charset::classify;

/// Shortest run of identical characters that gets broken up.
const MIN_REPEAT_RUN: usize = 3;

/// Replaces all but the first character of every run of 3+ identical
/// characters with characters from the same category.
pub fn break_repeats<R: Rng>(password: &mut Vec<char>, ctx: &RepairContext<'_>, rng: &mut R) {
    let mut start = 0;
    while start < password.len() {
        let repeated = password[start];
        let mut end = start + 1;
        while end < password.len() && password[end] == repeated {
            end += 1;
        }

        if end - start >= MIN_REPEAT_RUN {
            let candidates = ctx.pool.replacement_candidates(classify(repeated));
            for index in start + 1..end {
                let mut avoid = vec![repeated, password[index - 1]];
                if let Some(next) = password.get(index + 1) {
                    avoid.push(*next);
                }
                password[index] = pick_avoiding(candidates, &avoid, rng);
            }
        }

        start = end;
    }
}

/// Position of a character inside its ordered run: letters compare
/// case-insensitively, digits numerically. Other characters never form runs.
fn sequence_rank(c: char) -> Option<(bool, u32)> {
    if c.is_ascii_alphabetic() {
        Some((false, c.to_ascii_lowercase() as u32))
    } else if c.is_ascii_digit() {
        Some((true, c as u32))
    } else {
        None
    }
}

/// `true` for three consecutive letters or digits, ascending or descending.
pub fn is_sequential(a: char, b: char, c: char) -> bool {
    let (Some((kind_a, a)), Some((kind_b, b)), Some((kind_c, c))) =
        (sequence_rank(a), sequence_rank(b), sequence_rank(c))
    else {
        return false;
    };
    if kind_a != kind_b || kind_b != kind_c {
        return false;
    }

    let first = b as i64 - a as i64;
    let second = c as i64 - b as i64;
    (first == 1 && second == 1) || (first == -1 && second == -1)
}

/// Replaces the middle character of every length-3 sequential run with
/// another character of its category.
pub fn break_sequences<R: Rng>(password: &mut Vec<char>, ctx: &RepairContext<'_>, rng: &mut R) {
    if password.len() < 3 {
        return;
    }

    for i in 0..password.len() - 2 {
        let (left, middle, right) = (password[i], password[i + 1], password[i + 2]);
        if !is_sequential(left, middle, right) {
            continue;
        }

        let before = i.checked_sub(1).map(|j| password[j]);
        let candidates = ctx.pool.replacement_candidates(classify(middle));
        let alternatives: Vec<char> = candidates
            .iter()
            .copied()
            .filter(|&c| {
                c != middle
                    && c != left
                    && c != right
                    && !is_sequential(left, c, right)
                    && before.is_none_or(|b| !is_sequential(b, left, c))
            })
            .collect();

        let replacement = match alternatives.choose(rng) {
            Some(c) => Some(*c),
            None => {
                let fallback: Vec<char> =
                    candidates.iter().copied().filter(|&c| c != middle).collect();
                fallback.choose(rng).copied()
            }
        };

        if let Some(c) = replacement {
            password[i + 1] = c;
        }
    }
}

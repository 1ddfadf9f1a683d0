//! Weighted random selection: single pick and sequential draw without
//! replacement.
//!
//! `single_pick` draws uniformly from the stacked-interval representation:
//! each participant occupies a contiguous block of size = weight within
//! [1, total], so P(name) = weight / total exactly. `draw_without_replacement`
//! repeats the pick against a shrinking private pool, which re-normalizes
//! the conditional probabilities after each removal (classic sequential
//! weighted sampling, not rejection sampling).
//!
//! Every entry point takes an explicit `&mut impl Rng` so callers control
//! seeding; tests use `StdRng::seed_from_u64`.

use rand::Rng;
use thiserror::Error;

use crate::roster::{Participant, Roster};

/// Errors from the selector.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    /// The candidate set has no weight to draw from. A precondition
    /// violation, never a normal "no winner" outcome.
    #[error("invalid pool: total weight is {total_weight}, must be greater than zero")]
    InvalidPool { total_weight: u64 },
}

/// Mutable working copy of a roster, owned by a single multi-winner draw.
///
/// Created per draw and discarded afterwards; the caller's roster is never
/// aliased or mutated.
#[derive(Debug, Clone)]
pub struct Pool {
    entries: Vec<Participant>,
}

impl Pool {
    pub fn from_roster(roster: &Roster) -> Self {
        Self {
            entries: roster.participants().to_vec(),
        }
    }

    /// Remaining candidates, in roster insertion order.
    pub fn entries(&self) -> &[Participant] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove a candidate by name. No-op if the name is absent.
    pub fn remove(&mut self, name: &str) {
        self.entries.retain(|p| p.name != name);
    }
}

/// Pick one name, with probability proportional to weight.
///
/// Draws a uniform integer r in [1, T] where T is the total weight, then
/// walks the entries in slice order subtracting each weight; the entry
/// that brings the running value to zero or below wins. Fails with
/// [`SelectorError::InvalidPool`] when T is zero (empty slice, or every
/// weight zero) — callers never receive a placeholder winner.
pub fn single_pick<'a, R: Rng>(
    entries: &'a [Participant],
    rng: &mut R,
) -> Result<&'a str, SelectorError> {
    let total: u64 = entries.iter().map(|p| p.weight).sum();
    if total == 0 {
        return Err(SelectorError::InvalidPool { total_weight: 0 });
    }

    let mut remaining = rng.gen_range(1..=total);
    for participant in entries {
        remaining = remaining.saturating_sub(participant.weight);
        if remaining == 0 {
            return Ok(&participant.name);
        }
    }
    // The running subtraction exhausts [1, total] over the full slice.
    unreachable!("draw value exceeded total weight")
}

/// Draw up to `k` unique winners, weighted, without replacement.
///
/// Copies the roster into a private [`Pool`], then alternates pick and
/// removal exactly `min(k, |roster|)` times. Stops early, without
/// raising, if a pick fails. Winners are returned in selection order with
/// no duplicates; the roster itself is untouched.
pub fn draw_without_replacement<R: Rng>(roster: &Roster, k: usize, rng: &mut R) -> Vec<String> {
    let mut pool = Pool::from_roster(roster);
    let draws = k.min(pool.len());
    let mut winners = Vec::with_capacity(draws);

    for _ in 0..draws {
        let winner = match single_pick(pool.entries(), rng) {
            Ok(name) => name.to_owned(),
            Err(_) => break,
        };
        pool.remove(&winner);
        winners.push(winner);
    }

    winners
}

//! Theoretical win odds derived from weights. Pure arithmetic, no
//! randomness; also serves as the ground truth the fairness simulation
//! should approximate.

use serde::{Deserialize, Serialize};

use crate::roster::Roster;

/// One participant's theoretical odds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsLine {
    pub name: String,
    pub weight: u64,
    /// 100 * weight / total_weight.
    pub percent: f64,
}

/// Compute each participant's odds of winning a single pick.
///
/// Lines come back in roster insertion order. An empty roster yields an
/// empty vec. Idempotent: no hidden state.
pub fn compute_odds(roster: &Roster) -> Vec<OddsLine> {
    let total = roster.total_weight();
    if total == 0 {
        return Vec::new();
    }

    roster
        .iter()
        .map(|p| OddsLine {
            name: p.name.clone(),
            weight: p.weight,
            percent: 100.0 * p.weight as f64 / total as f64,
        })
        .collect()
}

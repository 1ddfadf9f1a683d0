//! Fairness simulation: Monte Carlo validation that observed win rates
//! converge to the theoretical odds.
//!
//! Runs N independent single picks against the original, unmodified
//! roster (replacement is implicit — nothing is ever removed) and tallies
//! which name wins each trial. A diagnostic facility, not part of the
//! actual prize draw.

use std::collections::HashMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::odds::compute_odds;
use crate::roster::Roster;
use crate::selector::{single_pick, SelectorError};

/// Observed vs. expected win rate for one participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatedRate {
    pub name: String,
    /// Trials this participant won.
    pub wins: u64,
    /// 100 * wins / trials.
    pub observed_pct: f64,
    /// Theoretical odds from the weights.
    pub expected_pct: f64,
}

/// Result of a fairness simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub trials: u64,
    /// Per-participant rates in roster insertion order.
    pub rates: Vec<SimulatedRate>,
}

/// Run `trials` independent single picks and tally the winners.
///
/// The roster is never mutated, so the observed frequencies estimate the
/// single-pick marginals weight/total. Deterministic under a seeded rng.
/// Fails with [`SelectorError::InvalidPool`] only when the roster itself
/// has zero total weight.
pub fn simulate<R: Rng>(
    roster: &Roster,
    trials: u64,
    rng: &mut R,
) -> Result<SimulationReport, SelectorError> {
    let mut wins: HashMap<&str, u64> = HashMap::new();
    for _ in 0..trials {
        let winner = single_pick(roster.participants(), rng)?;
        *wins.entry(winner).or_insert(0) += 1;
    }

    let rates = compute_odds(roster)
        .into_iter()
        .map(|line| {
            let won = wins.get(line.name.as_str()).copied().unwrap_or(0);
            let observed_pct = if trials == 0 {
                0.0
            } else {
                100.0 * won as f64 / trials as f64
            };
            SimulatedRate {
                name: line.name,
                wins: won,
                observed_pct,
                expected_pct: line.percent,
            }
        })
        .collect();

    Ok(SimulationReport { trials, rates })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn roster(entries: &[(&str, u64)]) -> Roster {
        let mut roster = Roster::new();
        for (name, weight) in entries {
            roster.add(*name, *weight).unwrap();
        }
        roster
    }

    #[test]
    fn wins_sum_to_trials() {
        let roster = roster(&[("alice", 2), ("bob", 5), ("carol", 3)]);
        let mut rng = StdRng::seed_from_u64(17);

        let report = simulate(&roster, 500, &mut rng).unwrap();
        assert_eq!(report.trials, 500);
        let total_wins: u64 = report.rates.iter().map(|r| r.wins).sum();
        assert_eq!(total_wins, 500);
    }

    #[test]
    fn roster_is_not_mutated() {
        let roster = roster(&[("alice", 1), ("bob", 3)]);
        let before = roster.clone();

        let mut rng = StdRng::seed_from_u64(2);
        let _ = simulate(&roster, 200, &mut rng).unwrap();
        assert_eq!(roster, before);
    }

    #[test]
    fn deterministic_under_fixed_seed() {
        let roster = roster(&[("alice", 1), ("bob", 3), ("carol", 6)]);

        let mut rng_a = StdRng::seed_from_u64(123);
        let mut rng_b = StdRng::seed_from_u64(123);
        let report_a = simulate(&roster, 1000, &mut rng_a).unwrap();
        let report_b = simulate(&roster, 1000, &mut rng_b).unwrap();
        assert_eq!(report_a, report_b);
    }

    #[test]
    fn rates_follow_roster_order_with_expected_odds() {
        let roster = roster(&[("bob", 3), ("alice", 1)]);
        let mut rng = StdRng::seed_from_u64(8);

        let report = simulate(&roster, 100, &mut rng).unwrap();
        assert_eq!(report.rates[0].name, "bob");
        assert_eq!(report.rates[0].expected_pct, 75.0);
        assert_eq!(report.rates[1].name, "alice");
        assert_eq!(report.rates[1].expected_pct, 25.0);
    }

    #[test]
    fn empty_roster_fails() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = simulate(&Roster::new(), 10, &mut rng).unwrap_err();
        assert_eq!(err, SelectorError::InvalidPool { total_weight: 0 });
    }

    #[test]
    fn zero_trials_reports_zero_rates() {
        let roster = roster(&[("alice", 1)]);
        let mut rng = StdRng::seed_from_u64(0);

        let report = simulate(&roster, 0, &mut rng).unwrap();
        assert_eq!(report.trials, 0);
        assert_eq!(report.rates[0].wins, 0);
        assert_eq!(report.rates[0].observed_pct, 0.0);
    }
}

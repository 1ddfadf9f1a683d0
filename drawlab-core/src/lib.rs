//! DrawLab Core — weighted prize draw engine.
//!
//! This crate contains the whole of the draw logic:
//! - Participant roster with insertion-order iteration and validation
//! - Weighted selector: single pick and sequential draw without replacement
//! - Theoretical odds computation
//! - Fairness simulation (Monte Carlo check of odds convergence)
//! - Deterministic seed derivation for reproducible runs

pub mod odds;
pub mod rng;
pub mod roster;
pub mod selector;
pub mod simulation;

pub use odds::{compute_odds, OddsLine};
pub use rng::SeedTree;
pub use roster::{Participant, Roster, RosterError, RosterFileError};
pub use selector::{draw_without_replacement, single_pick, Pool, SelectorError};
pub use simulation::{simulate, SimulatedRate, SimulationReport};

//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI crate
//!   and benches. Breaking changes are allowed and expected.

// Dice
pub use crate::die::{Die, DieConfig, DieError, Fingerprint};
// Input
pub use crate::parse::{parse_dice, parse_grid, parse_race, ParseError};
// Simulations
pub use crate::sim::{
    race_order, rounds_to_reach, AccumulateCfg, RaceCfg, RaceOutcome, SimError,
};
// Flood-fill
pub use crate::visit::{reachable_union, visit, Cell, Grid, VisitCfg, VisitReport};
// Part dispatch
pub use crate::puzzle::{solve, Answer, Part, PuzzleError, SolveCfg};

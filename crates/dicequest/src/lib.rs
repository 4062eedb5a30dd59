//! Die simulations: a deterministic per-die roll generator and the puzzles
//! built on top of it.
//!
//! Layout
//! - `die`: generator state machine (`DieState`) and the rollable `Die`.
//! - `sim`: round-based simulations (accumulator, race).
//! - `visit`: layered flood-fill matching one die's rolls against a grid.
//! - `parse`: text input → die configurations plus companion track/grid.
//! - `puzzle`: closed part selector dispatching to the three solvers.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; the CLI
//!   crate is the only consumer besides tests and benches.

pub mod api;
pub mod cfg;
pub mod die;
pub mod parse;
pub mod puzzle;
pub mod sim;
pub mod visit;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::die::{Die, DieConfig, DieError, DieState, Fingerprint};
    pub use crate::parse::{parse_dice, parse_grid, parse_race, ParseError};
    pub use crate::puzzle::{solve, Answer, Part, PuzzleError, SolveCfg};
    pub use crate::sim::{
        race_order, rounds_to_reach, AccumulateCfg, RaceCfg, RaceOutcome, SimError,
    };
    pub use crate::visit::{reachable_union, visit, Cell, Grid, VisitCfg, VisitReport};
}

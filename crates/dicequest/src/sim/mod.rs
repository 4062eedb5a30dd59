//! Round-based simulations over a set of dice.
//!
//! A round rolls every still-active die exactly once, in input order.
//! - `accumulate`: sum all rolls until a point target is reached.
//! - `race`: each die walks a shared track, stepping only on matching rolls.
//!
//! Both loops are unbounded by default; `max_rounds` in the cfg structs turns
//! a non-terminating configuration into `SimError::RoundLimit`.

mod accumulate;
mod race;

pub use accumulate::{rounds_to_reach, AccumulateCfg};
pub use race::{race_order, RaceCfg, RaceOutcome};

use std::fmt;

/// Failures of the round simulations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// No dice to roll but work to do.
    NoDice,
    /// A die needs a track symbol that none of its faces carries.
    Unreachable { die: usize, symbol: i64 },
    /// `max_rounds` rounds were played without finishing.
    RoundLimit { rounds: u64 },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::NoDice => write!(f, "simulation needs at least one die"),
            SimError::Unreachable { die, symbol } => {
                write!(f, "die {die} has no face {symbol} and can never finish")
            }
            SimError::RoundLimit { rounds } => {
                write!(f, "simulation did not finish within {rounds} rounds")
            }
        }
    }
}

impl std::error::Error for SimError {}

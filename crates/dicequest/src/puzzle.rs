//! Part selector: maps a puzzle part to its parser + solver pair.
//!
//! The set of parts is closed, so dispatch is a plain `match` returning a
//! function value rather than a lookup by name.

use std::fmt;

use serde::Serialize;

use crate::die::Die;
use crate::parse::{parse_dice, parse_grid, parse_race, ParseError};
use crate::sim::{race_order, rounds_to_reach, AccumulateCfg, RaceCfg, SimError};
use crate::visit::{reachable_union, VisitCfg};

/// Puzzle part.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    /// Rounds until the summed rolls reach the target.
    One,
    /// Finishing order of the track race.
    Two,
    /// Cells reachable by any die's flood-fill.
    Three,
}

/// Signature shared by all part solvers.
pub type Solver = fn(&str, &SolveCfg) -> Result<Answer, PuzzleError>;

impl Part {
    pub const ALL: [Part; 3] = [Part::One, Part::Two, Part::Three];

    /// `1 | 2 | 3` → part.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Part::One),
            2 => Some(Part::Two),
            3 => Some(Part::Three),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
            Part::Three => 3,
        }
    }

    pub fn solver(self) -> Solver {
        match self {
            Part::One => solve_accumulate,
            Part::Two => solve_race,
            Part::Three => solve_flood,
        }
    }
}

/// Knobs for all parts; defaults reproduce the plain puzzle rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct SolveCfg {
    pub accumulate: AccumulateCfg,
    pub race: RaceCfg,
    pub visit: VisitCfg,
}

/// Result of a part.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Rounds(u64),
    Order(Vec<usize>),
    Cells(usize),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Rounds(n) => write!(f, "{n}"),
            Answer::Order(order) => {
                let parts: Vec<String> = order.iter().map(ToString::to_string).collect();
                write!(f, "{}", parts.join(","))
            }
            Answer::Cells(n) => write!(f, "{n}"),
        }
    }
}

/// Failure of a part: bad input or a simulation that cannot finish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    Parse(ParseError),
    Sim(SimError),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::Parse(e) => write!(f, "parse error: {e}"),
            PuzzleError::Sim(e) => write!(f, "simulation error: {e}"),
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PuzzleError::Parse(e) => Some(e),
            PuzzleError::Sim(e) => Some(e),
        }
    }
}

impl From<ParseError> for PuzzleError {
    fn from(e: ParseError) -> Self {
        PuzzleError::Parse(e)
    }
}

impl From<SimError> for PuzzleError {
    fn from(e: SimError) -> Self {
        PuzzleError::Sim(e)
    }
}

/// Parse `text` for `part` and solve it.
pub fn solve(part: Part, text: &str, cfg: &SolveCfg) -> Result<Answer, PuzzleError> {
    let _span = tracing::debug_span!("solve", part = part.index()).entered();
    (part.solver())(text, cfg)
}

fn solve_accumulate(text: &str, cfg: &SolveCfg) -> Result<Answer, PuzzleError> {
    let mut dice: Vec<Die> = parse_dice(text)?.into_iter().map(Die::new).collect();
    let rounds = rounds_to_reach(&mut dice, cfg.accumulate)?;
    Ok(Answer::Rounds(rounds))
}

fn solve_race(text: &str, cfg: &SolveCfg) -> Result<Answer, PuzzleError> {
    let (configs, track) = parse_race(text)?;
    let mut dice: Vec<Die> = configs.into_iter().map(Die::new).collect();
    let outcome = race_order(&mut dice, &track, cfg.race)?;
    Ok(Answer::Order(outcome.order))
}

fn solve_flood(text: &str, cfg: &SolveCfg) -> Result<Answer, PuzzleError> {
    let (configs, grid) = parse_grid(text)?;
    let dice: Vec<Die> = configs.into_iter().map(Die::new).collect();
    Ok(Answer::Cells(reachable_union(&grid, dice, cfg.visit)))
}

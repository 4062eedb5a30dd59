use crate::cfg::DEFAULT_TARGET;
use crate::die::Die;

use super::SimError;

/// Accumulator configuration.
#[derive(Clone, Copy, Debug)]
pub struct AccumulateCfg {
    /// Stop once the running total is `>= target`.
    pub target: i64,
    /// Optional guard for dice whose faces cannot drive the total upwards.
    /// `None` keeps the plain loop.
    pub max_rounds: Option<u64>,
}

impl Default for AccumulateCfg {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            max_rounds: None,
        }
    }
}

/// Roll every die once per round, summing faces, until the total reaches
/// `cfg.target`. Returns the number of completed rounds.
///
/// Precondition (unguarded unless `max_rounds` is set): the dice push the
/// total upwards on average. Otherwise the loop does not end.
pub fn rounds_to_reach(dice: &mut [Die], cfg: AccumulateCfg) -> Result<u64, SimError> {
    if cfg.target <= 0 {
        return Ok(0);
    }
    if dice.is_empty() {
        return Err(SimError::NoDice);
    }
    // Wide enough that no realistic round count of i64 faces overflows.
    let mut total: i128 = 0;
    let mut rounds: u64 = 0;
    while total < i128::from(cfg.target) {
        if cfg.max_rounds.is_some_and(|limit| rounds >= limit) {
            return Err(SimError::RoundLimit { rounds });
        }
        rounds += 1;
        total += dice
            .iter_mut()
            .map(|die| i128::from(die.roll()))
            .sum::<i128>();
    }
    tracing::debug!(rounds, total, dice = dice.len(), "accumulate_done");
    Ok(rounds)
}

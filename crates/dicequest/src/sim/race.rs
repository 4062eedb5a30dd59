use crate::die::Die;

use super::SimError;

/// Race configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct RaceCfg {
    pub max_rounds: Option<u64>,
}

/// Result of a race.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RaceOutcome {
    /// 1-based die indices in finishing order.
    pub order: Vec<usize>,
    /// Rolling rounds played until the last die finished.
    pub rounds: u64,
}

/// Race all dice along `track`.
///
/// Each round, every die that has not finished rolls once; a roll equal to the
/// die's next track symbol moves it forward. A die that reaches the end of the
/// track finishes immediately and stops rolling. Dice finishing in the same
/// round are recorded in input order.
pub fn race_order(
    dice: &mut [Die],
    track: &[i64],
    cfg: RaceCfg,
) -> Result<RaceOutcome, SimError> {
    for (i, die) in dice.iter().enumerate() {
        if let Some(&symbol) = track.iter().find(|s| !die.config().faces().contains(s)) {
            return Err(SimError::Unreachable { die: i + 1, symbol });
        }
    }

    let mut positions = vec![0usize; dice.len()];
    let mut finished = vec![false; dice.len()];
    let mut order = Vec::with_capacity(dice.len());
    let mut rounds: u64 = 0;

    // An empty track is complete before anyone rolls.
    if track.is_empty() {
        order.extend(1..=dice.len());
        return Ok(RaceOutcome { order, rounds });
    }

    while order.len() < dice.len() {
        if cfg.max_rounds.is_some_and(|limit| rounds >= limit) {
            return Err(SimError::RoundLimit { rounds });
        }
        rounds += 1;
        for (i, die) in dice.iter_mut().enumerate() {
            if finished[i] {
                continue;
            }
            if die.roll() == track[positions[i]] {
                positions[i] += 1;
                if positions[i] == track.len() {
                    finished[i] = true;
                    order.push(i + 1);
                    tracing::trace!(die = i + 1, round = rounds, "race_finish");
                }
            }
        }
    }
    tracing::debug!(rounds, dice = dice.len(), track = track.len(), "race_done");
    Ok(RaceOutcome { order, rounds })
}

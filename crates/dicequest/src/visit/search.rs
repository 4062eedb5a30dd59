//! Stack-driven layered search for one die, plus the multi-die union.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::cfg::STEPS;
use crate::die::{Die, Fingerprint};

use super::types::{Cell, Grid};

/// Search configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct VisitCfg {
    /// Optional cap on the depths (generator calls) one search may
    /// materialise. `None` runs until the work stack drains.
    pub max_depth: Option<usize>,
}

/// Outcome of one die's search.
#[derive(Clone, Debug, Default)]
pub struct VisitReport {
    /// Every cell matched at some depth.
    pub visited: HashSet<Cell>,
    /// The same cells in the order they were first matched.
    pub first_seen: Vec<Cell>,
    /// Number of depths materialised, i.e. rolls drawn during the search.
    pub depths: usize,
}

/// Flood-fill `grid` with the roll sequence of `die`.
///
/// The die is advanced in place: exactly once per materialised depth.
pub fn visit(grid: &Grid, die: &mut Die, cfg: VisitCfg) -> VisitReport {
    let report = FloodRunner::new(grid, die, cfg.max_depth).run();
    tracing::debug!(
        die = die.config().id(),
        cells = report.visited.len(),
        depths = report.depths,
        "visit_done"
    );
    report
}

/// Search every die independently (in parallel) and return the size of the
/// union of their visited cells.
pub fn reachable_union(grid: &Grid, dice: Vec<Die>, cfg: VisitCfg) -> usize {
    let union = dice
        .into_par_iter()
        .map(|mut die| visit(grid, &mut die, cfg).visited)
        .reduce(HashSet::new, |mut acc, cells| {
            acc.extend(cells);
            acc
        });
    union.len()
}

/// Search driver: owns the roll cache (single writer) and the work stack.
struct FloodRunner<'a> {
    grid: &'a Grid,
    die: &'a mut Die,
    max_depth: Option<usize>,
    /// Roll value and post-roll fingerprint, indexed by depth. The
    /// fingerprint after roll d tags the items proposed from depth d.
    rolls: Vec<(i64, Fingerprint)>,
    stack: Vec<(usize, Cell)>,
    queued: HashSet<(Cell, Fingerprint)>,
    report: VisitReport,
}

impl<'a> FloodRunner<'a> {
    fn new(grid: &'a Grid, die: &'a mut Die, max_depth: Option<usize>) -> Self {
        Self {
            grid,
            die,
            max_depth,
            rolls: Vec::new(),
            stack: Vec::new(),
            queued: HashSet::new(),
            report: VisitReport::default(),
        }
    }

    fn run(mut self) -> VisitReport {
        let grid = self.grid;
        // Seeds share the tag of roll 0 with the items proposed from depth 0.
        let (first, seed_tag) = self.roll_layer();
        for cell in grid.cells_matching(first) {
            self.queued.insert((cell, seed_tag));
            self.stack.push((0, cell));
        }
        while let Some((depth, cell)) = self.stack.pop() {
            debug_assert!(depth <= self.rolls.len(), "depth skipped a roll");
            if depth == self.rolls.len() {
                self.roll_layer();
            }
            let (face, tag) = self.rolls[depth];
            if self.grid.get(cell) != face {
                continue;
            }
            self.mark(cell);
            if self.max_depth.is_some_and(|cap| depth + 1 >= cap) {
                continue;
            }
            for step in STEPS {
                let Some(next) = self.grid.offset(cell, step) else {
                    continue;
                };
                if self.queued.insert((next, tag)) {
                    self.stack.push((depth + 1, next));
                }
            }
        }
        self.report.depths = self.rolls.len();
        self.report
    }

    /// Draw the roll for the next depth and cache it.
    fn roll_layer(&mut self) -> (i64, Fingerprint) {
        let entry = (self.die.roll(), self.die.fingerprint());
        self.rolls.push(entry);
        entry
    }

    fn mark(&mut self, cell: Cell) {
        if self.report.visited.insert(cell) {
            self.report.first_seen.push(cell);
        }
    }
}

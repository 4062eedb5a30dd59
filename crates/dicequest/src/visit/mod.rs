//! Layered flood-fill: which grid cells can one die's roll sequence trace out?
//!
//! Purpose
//! - Seed every cell equal to the die's first roll, then grow layer by layer:
//!   a matched cell at depth `s` proposes itself and its four orthogonal
//!   neighbours for depth `s + 1`, which must equal the die's next roll.
//! - `reachable_union` runs one search per die and counts the union.
//!
//! Lock-step invariant
//! - Depth and generator calls advance together. Each depth is rolled exactly
//!   once, lazily, when its first work item is popped; every item at that
//!   depth compares against the same cached value. After a search,
//!   `die.rolls_made() == report.depths`.
//!
//! Dedup and termination
//! - A queued item is keyed by `(cell, fingerprint)`. Seeds and the items
//!   proposed from depth `s` are tagged with the generator state right after
//!   roll `s`, so a seed cell can not be queued again at depth 1, and later
//!   depths get tags that never repeat for one die.
//! - The stack drains once no matched cell proposes an unseen key. Depth is
//!   not bounded by the cell count: one cell can match at many depths.
//!   `VisitCfg::max_depth` is an opt-in cap for dice that keep matching.

mod search;
mod types;

pub use search::{reachable_union, visit, VisitCfg, VisitReport};
pub use types::{Cell, Grid};

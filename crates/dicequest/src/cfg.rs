//! Fixed defaults shared by the solvers.
//!
//! Policy
//! - Defaults are constants; callers override them through the `*Cfg`
//!   structs (and the CLI through flags) rather than by editing call sites.

/// Point total the accumulator simulation must reach.
pub const DEFAULT_TARGET: i64 = 10_000;

/// Initial generator state besides the pulse (which starts at the seed).
pub(crate) const INITIAL_FACE: usize = 0;
pub(crate) const INITIAL_ROLL_NUMBER: u64 = 1;

/// Offsets of the cells a flood-fill layer proposes from a matched cell:
/// the cell itself, then its four orthogonal neighbours.
pub(crate) const STEPS: [(isize, isize); 5] = [(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1)];

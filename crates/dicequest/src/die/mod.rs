//! Deterministic dice: a small integer state machine per die plus the face
//! table it indexes into.
//!
//! Purpose
//! - `DieState` is the generator: each `advance` mixes the pulse with the
//!   roll counter and returns the next face index.
//! - `Die` binds one generator to an immutable `DieConfig` and decodes face
//!   indices into face values.
//!
//! Invariants
//! - `face < faces.len()` at all times.
//! - `roll_number` grows by exactly one per roll, so successive fingerprints of
//!   one die never repeat. The flood-fill relies on this to tag search layers.

mod roll;
mod state;
mod types;

pub use roll::Die;
pub use state::DieState;
pub use types::{DieConfig, DieError, Fingerprint};

#[cfg(test)]
mod tests;

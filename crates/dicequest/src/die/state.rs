//! The generator state machine.

use crate::cfg::{INITIAL_FACE, INITIAL_ROLL_NUMBER};

use super::types::Fingerprint;

/// Generator state of one die.
///
/// `spin = roll_number * pulse` is formed in `u128`; with a `u32` seed the
/// pulse stays below `2 * seed + roll_number + 1`, so the product and every
/// reduction fit without truncation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DieState {
    pulse: u64,
    face: usize,
    roll_number: u64,
}

impl DieState {
    /// Fresh state for a die with the given seed.
    pub fn new(seed: u32) -> Self {
        Self {
            pulse: u64::from(seed),
            face: INITIAL_FACE,
            roll_number: INITIAL_ROLL_NUMBER,
        }
    }

    /// Advance one step and return the new face index in `[0, num_faces)`.
    ///
    /// Callers guarantee `seed >= 1` and `num_faces >= 1` (see `DieConfig::new`).
    pub fn advance(&mut self, seed: u32, num_faces: usize) -> usize {
        debug_assert!(seed >= 1 && num_faces >= 1);
        let seed = u128::from(seed);
        let spin = u128::from(self.roll_number) * u128::from(self.pulse);
        // < seed <= u32::MAX, lossless
        let reduced = ((u128::from(self.pulse) + spin) % seed) as u64;
        self.pulse = reduced + 1 + self.roll_number + seed as u64;
        self.roll_number += 1;
        // < num_faces, lossless
        self.face = ((self.face as u128 + spin) % num_faces as u128) as usize;
        self.face
    }

    #[inline]
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint {
            pulse: self.pulse,
            face: self.face,
            roll_number: self.roll_number,
        }
    }

    /// Number of completed `advance` calls.
    #[inline]
    pub fn rolls_made(&self) -> u64 {
        self.roll_number - INITIAL_ROLL_NUMBER
    }
}

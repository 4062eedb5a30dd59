//! Configuration, fingerprint and error types for dice.

use std::fmt;

/// Immutable description of one die as read from the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DieConfig {
    id: u64,
    faces: Vec<i64>,
    seed: u32,
}

impl DieConfig {
    /// Validate and build a configuration. A die needs at least one face and
    /// a positive seed, otherwise the generator would reduce modulo zero.
    pub fn new(id: u64, faces: Vec<i64>, seed: u32) -> Result<Self, DieError> {
        if faces.is_empty() {
            return Err(DieError::EmptyFaces { id });
        }
        if seed == 0 {
            return Err(DieError::ZeroSeed { id });
        }
        Ok(Self { id, faces, seed })
    }

    /// Informational id from the input line.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn faces(&self) -> &[i64] {
        &self.faces
    }

    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }
}

/// Snapshot of a generator's full state. Only compared and hashed, never
/// interpreted by callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    pub pulse: u64,
    pub face: usize,
    pub roll_number: u64,
}

/// Rejected die configurations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DieError {
    /// The face table is empty.
    EmptyFaces { id: u64 },
    /// The seed is zero.
    ZeroSeed { id: u64 },
}

impl fmt::Display for DieError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DieError::EmptyFaces { id } => write!(f, "die {id} has no faces"),
            DieError::ZeroSeed { id } => write!(f, "die {id} has seed 0 (must be >= 1)"),
        }
    }
}

impl std::error::Error for DieError {}

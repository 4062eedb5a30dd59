use super::state::DieState;
use super::types::{DieConfig, Fingerprint};

/// A configured die with its own live generator.
#[derive(Clone, Debug)]
pub struct Die {
    config: DieConfig,
    state: DieState,
}

impl Die {
    pub fn new(config: DieConfig) -> Self {
        let state = DieState::new(config.seed());
        Self { config, state }
    }

    /// Advance the generator and return the face value it lands on.
    pub fn roll(&mut self) -> i64 {
        let idx = self
            .state
            .advance(self.config.seed(), self.config.num_faces());
        self.config.faces()[idx]
    }

    /// Current generator state; does not advance.
    #[inline]
    pub fn fingerprint(&self) -> Fingerprint {
        self.state.fingerprint()
    }

    /// How many times `roll` has been called.
    #[inline]
    pub fn rolls_made(&self) -> u64 {
        self.state.rolls_made()
    }

    #[inline]
    pub fn config(&self) -> &DieConfig {
        &self.config
    }
}

impl From<DieConfig> for Die {
    fn from(config: DieConfig) -> Self {
        Self::new(config)
    }
}

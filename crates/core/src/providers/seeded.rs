use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::errors::CoreError;

use super::traits::EtaSource;

/// ChaCha8-backed eta source. Two sources built from the same seed produce
/// the same sequence of etas.
#[derive(Debug, Clone)]
pub struct SeededEta {
    rng: ChaCha8Rng,
}

impl SeededEta {
    /// Deterministic source for tests and replays.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seed from the operating system's entropy pool.
    pub fn from_entropy() -> Result<Self, CoreError> {
        let mut seed = [0u8; 32];
        getrandom::getrandom(&mut seed)?;
        Ok(Self {
            rng: ChaCha8Rng::from_seed(seed),
        })
    }
}

impl EtaSource for SeededEta {
    fn name(&self) -> &str {
        "chacha8"
    }

    fn next_eta_days(&mut self, min_days: u32, max_days: u32) -> u32 {
        if min_days >= max_days {
            return min_days;
        }
        self.rng.random_range(min_days..=max_days)
    }
}

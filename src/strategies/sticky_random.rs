use super::errors::StrategyError;
use super::strategy::Strategy;
use crate::rng::MaybeSeededRng;

use rand::Rng;

#[derive(Debug)]
pub struct StickyRandom {
    n_sources: usize,
    last_chosen: usize,
    last_observed_return: u64,
    rng: MaybeSeededRng,
}

impl StickyRandom {
    pub fn new(n_sources: usize, seed: Option<u64>) -> Self {
        Self {
            n_sources,
            last_chosen: 0,
            last_observed_return: 0,
            rng: MaybeSeededRng::new(seed),
        }
    }
}

impl Strategy for StickyRandom {
    fn choose(&mut self, thrown: &[u64], returned: &[u64]) -> Result<usize, StrategyError> {
        for len in [thrown.len(), returned.len()] {
            if len != self.n_sources {
                return Err(StrategyError::CounterLengthMismatch {
                    expected: self.n_sources,
                    actual: len,
                });
            }
        }
        if self.n_sources == 0 {
            return Err(StrategyError::NoSourcesAvailable);
        }

        // no new success since the last look, abandon and re-roll
        if returned[self.last_chosen] <= self.last_observed_return {
            self.last_chosen = self.rng.get_rng().random_range(0..self.n_sources);
        }

        self.last_observed_return = returned[self.last_chosen];
        Ok(self.last_chosen)
    }
}

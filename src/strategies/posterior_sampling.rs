use super::errors::StrategyError;
use super::strategy::Strategy;
use crate::rng::MaybeSeededRng;

use rand_distr::{Beta, Distribution};

pub const DEFAULT_BASE: f64 = 2.0;

// Thompson sampling with a symmetric Beta(base/2, base/2) prior per source.
#[derive(Debug)]
pub struct PosteriorSampling {
    n_sources: usize,
    base: f64,
    rng: MaybeSeededRng,
}

impl PosteriorSampling {
    pub fn new(n_sources: usize, base: Option<f64>, seed: Option<u64>) -> Self {
        Self {
            n_sources,
            base: base.unwrap_or(DEFAULT_BASE),
            rng: MaybeSeededRng::new(seed),
        }
    }

    fn posteriors(&self, thrown: &[u64], returned: &[u64]) -> Vec<(f64, f64)> {
        thrown
            .iter()
            .zip(returned)
            .map(|(&thrown, &returned)| {
                let alpha = 0.5 * self.base + returned as f64;
                let beta = 0.5 * self.base + thrown as f64 - returned as f64;
                (alpha, beta)
            })
            .collect()
    }
}

impl Strategy for PosteriorSampling {
    fn choose(&mut self, thrown: &[u64], returned: &[u64]) -> Result<usize, StrategyError> {
        for len in [thrown.len(), returned.len()] {
            if len != self.n_sources {
                return Err(StrategyError::CounterLengthMismatch {
                    expected: self.n_sources,
                    actual: len,
                });
            }
        }

        // draw one sample from every posterior and exploit the most optimistic one
        let samples = self
            .posteriors(thrown, returned)
            .into_iter()
            .map(|(alpha, beta)| {
                Beta::new(alpha, beta)
                    .map_err(|e| StrategyError::SamplingError(e.to_string()))
                    .map(|posterior| posterior.sample(self.rng.get_rng()))
            })
            .collect::<Result<Vec<f64>, StrategyError>>()?;

        samples
            .into_iter()
            .enumerate()
            .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
            .map(|(index, _)| index)
            .ok_or(StrategyError::NoSourcesAvailable)
    }
}

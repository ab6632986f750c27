use super::errors::StrategyError;
use super::posterior_sampling::PosteriorSampling;
use super::sticky_random::StickyRandom;

use serde::Deserialize;

// Picks the next source to play from the per-source trial and success counters.
// Implementations may mutate their own state but never the counters.
pub trait Strategy: Send {
    fn choose(&mut self, thrown: &[u64], returned: &[u64]) -> Result<usize, StrategyError>;
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum StrategyType {
    StickyRandom {
        seed: Option<u64>,
    },
    PosteriorSampling {
        base: Option<f64>,
        seed: Option<u64>,
    },
}

impl StrategyType {
    pub fn into_inner(self, n_sources: usize) -> Box<dyn Strategy + Send> {
        match self {
            StrategyType::StickyRandom { seed } => Box::new(StickyRandom::new(n_sources, seed)),
            StrategyType::PosteriorSampling { base, seed } => {
                Box::new(PosteriorSampling::new(n_sources, base, seed))
            }
        }
    }
}

use crate::strategies::errors::StrategyError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("A pool needs at least one source")]
    NoSources,
    #[error("Expected {expected} rates, got {actual}")]
    RateCountMismatch { expected: usize, actual: usize },
    #[error("Cannot balance rates summing to {0}")]
    UnbalanceableRates(f64),
    #[error("Strategy chose source {index} but the pool only has {n_sources}")]
    SourceOutOfRange { index: usize, n_sources: usize },
    #[error(transparent)]
    Strategy(#[from] StrategyError),
}

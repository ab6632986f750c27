use thiserror::Error;

#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("No sources to choose from")]
    NoSourcesAvailable,
    #[error("Expected counters for {expected} sources, got {actual}")]
    CounterLengthMismatch { expected: usize, actual: usize },
    #[error("Failed to sample posterior: {0}")]
    SamplingError(String),
}

pub mod errors;
mod posterior_sampling;
mod sticky_random;
mod strategy;

pub use posterior_sampling::{PosteriorSampling, DEFAULT_BASE};
pub use sticky_random::StickyRandom;
pub use strategy::{Strategy, StrategyType};

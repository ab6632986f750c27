pub mod config;
pub mod rng;
pub mod simulation;
pub mod strategies;

pub mod errors;
mod pool;
mod source;

pub use pool::{PoolStats, SourcePool};
pub use source::RewardSource;

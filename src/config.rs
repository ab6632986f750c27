use crate::strategies::StrategyType;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SimulationConfig {
    pub n_sources: usize,
    pub trials: u64,
    #[serde(default = "default_batch_size")]
    pub batch_size: u64,
    #[serde(default)]
    pub balanced: bool,
    #[serde(default)]
    pub rates: Option<Vec<f64>>,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_batch_size() -> u64 {
    1_000
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    pub simulation: SimulationConfig,
    pub strategy: StrategyType,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config"))
            .add_source(Environment::with_prefix("SIM"))
            .build()?;

        builder.try_deserialize()
    }
}

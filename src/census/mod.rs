//! The page loop that drives a run: configuration and the sequential engine.

mod config;
mod engine;

pub use config::{CensusConfig, ConfigError};
pub use engine::{CensusEngine, CensusError, CensusReport};

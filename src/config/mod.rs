//! Config module - YAML run parameters

mod loader;

pub use loader::{load_params, ConfigError, DataIngestionParams, Params};

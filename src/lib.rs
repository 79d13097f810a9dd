//! Splitify - Text Dataset Ingestion & Train/Test Split Pipeline
//!
//! Loads a labeled text CSV from a URL or local path, normalizes it to
//! the canonical `target`/`text` schema, partitions it with a seeded
//! deterministic split, and persists `train.csv`/`test.csv` under
//! `<out>/raw/`.

pub mod config;
pub mod data;
pub mod logging;
pub mod pipeline;

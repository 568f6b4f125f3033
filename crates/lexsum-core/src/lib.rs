//! LexSum Core: configuration, data directories, shared error type.

pub mod config;
pub mod error;

pub use config::{AnalysisSettings, DataPaths, LexSumConfig};
pub use error::{Error, Result};

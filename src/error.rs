//! Error types for the Surfrank driver

use crate::loader::LoadError;
use surfrank_algorithms::AlgoError;
use thiserror::Error;

/// Errors that can occur while loading, configuring or ranking
#[derive(Error, Debug)]
pub enum SurfrankError {
    /// Ranking engine or graph construction error
    #[error("Algorithm error: {0}")]
    AlgoError(#[from] AlgoError),

    /// Graph file could not be read or parsed
    #[error("Load error: {0}")]
    LoadError(#[from] LoadError),

    /// Configuration value out of range
    #[error("Config error: {0}")]
    ConfigError(String),

    /// YAML config parse error
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type SurfrankResult<T> = Result<T, SurfrankError>;

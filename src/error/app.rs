use thiserror::Error;

use super::{CheckError, ConfigError, SchemaError, SuiteError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
    #[error("HTTP client error: {source}")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
    #[error("Check error: {0}")]
    Check(#[from] CheckError),
    #[error("Suite error: {0}")]
    Suite(#[from] SuiteError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn config<E>(error: E) -> Self
    where
        E: Into<ConfigError>,
    {
        error.into().into()
    }

    pub fn suite<E>(error: E) -> Self
    where
        E: Into<SuiteError>,
    {
        error.into().into()
    }
}

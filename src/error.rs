use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Benchmark label must not be empty")]
    EmptyLabel,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid value for field '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

impl BenchError {
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while bootstrapping config files.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// A tool name has no filename mapping.
    #[error("No filename found for config {0}.")]
    UnknownTool(String),

    /// Writing a config file failed.
    #[error("Failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The parameter file could not be read.
    #[error("Failed to read parameter file {path:?}")]
    ReadParams {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The parameter file is not valid TOML for the expected shape.
    #[error("Failed to parse parameter file {path:?}")]
    ParseParams {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A generated config could not be serialized.
    #[error("Failed to render config")]
    Render(#[from] serde_json::Error),

    /// A write task panicked or was aborted.
    #[error("Config write task failed")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, BootstrapError>;

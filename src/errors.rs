// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilemergeError {
    #[error("Required option '{0}' missing")]
    MissingRequiredParameter(&'static str),

    #[error("Exactly one of these options required: [-y | -D | -f | -w | -l]")]
    InvalidSourceSelection,

    #[error("Unsupported input path generation mode: {0}")]
    UnsupportedMode(String),

    #[error("Unsupported compression codec: {0} (expected gzip, bzip, lzo or snappy)")]
    UnsupportedCodec(String),

    #[error("Invalid value '{value}' for '{name}': {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("External tool failed on script {script} with exit code {code}")]
    ExternalTool { script: String, code: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FilemergeError {
    pub fn invalid(name: &'static str, value: impl ToString, reason: impl Into<String>) -> Self {
        FilemergeError::InvalidParameter {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Errors caused by how the tool was invoked, for which usage is shown.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            FilemergeError::MissingRequiredParameter(_)
                | FilemergeError::InvalidSourceSelection
                | FilemergeError::UnsupportedCodec(_)
                | FilemergeError::InvalidParameter { .. }
        )
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, FilemergeError>;

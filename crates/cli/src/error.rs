//! CLI error types

use std::path::PathBuf;

use column_schema_core::InferenceError;
use thiserror::Error;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read file {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Failed to write file {0}: {1}")]
    FileWriteError(PathBuf, String),

    #[error("Failed to parse input: {0}")]
    ParseError(String),

    #[error("Inference failed: {0}")]
    InferenceError(#[from] InferenceError),

    #[error("Failed to serialize schema: {0}")]
    SerializationError(String),
}

//! Error types for schema inference
//!
//! Inference itself never fails. These errors only surface from opt-in
//! strictness and from parsing type names.

use thiserror::Error;

/// Errors that can occur during schema inference
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InferenceError {
    /// Header length differs from the inferred column count under `Reject`
    #[error("Header has {header} names but {columns} columns were inferred")]
    HeaderMismatch { header: usize, columns: usize },

    /// Invalid configuration
    #[error("Invalid inference configuration: {0}")]
    InvalidConfig(String),

    /// Unknown data type name
    #[error("Unknown data type: {0}")]
    UnknownType(String),
}

//! Command implementations for the `colschema` binary
//!
//! Kept as a library so the handlers can be driven from integration tests.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use error::CliError;

//! Column Schema Core - type inference for untyped tabular text
//!
//! Provides:
//! - A closed data type lattice and common-type resolution
//! - Per-field and per-row type detection
//! - Associative merging of partial results for partitioned or parallel runs
//! - Schema building with explicit header handling

pub mod inference;

// Re-export commonly used types
pub use inference::{
    DataType, HeaderMismatchPolicy, InferenceConfig, InferenceError, InferredSchema,
    SchemaBuilder, SchemaField, infer_schema,
};

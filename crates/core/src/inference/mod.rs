//! Schema inference engine for untyped delimited-text rows
//!
//! This module infers a column type for every field position of a row
//! collection, then pairs the types with header names.
//!
//! ## Features
//!
//! - **Type lattice** - `Null` < numeric chain < `String`, with an explicit precedence table
//! - **Field detection** - A parse ladder that only ever widens a column's type
//! - **Partial merging** - Associative, commutative merging of per-partition results
//! - **Execution** - Sequential, partitioned and rayon-parallel folds over the same operators
//! - **Header pairing** - Explicit policy for header/column count disagreement
//!
//! ## Example
//!
//! ```rust
//! use column_schema_core::inference::{DataType, infer_schema};
//!
//! let rows = vec![
//!     vec![Some("1"), Some("Alice")],
//!     vec![Some("2.5"), None],
//! ];
//! let schema = infer_schema(&rows, &["score", "name"]);
//!
//! assert_eq!(schema.fields[0].data_type, DataType::Double);
//! assert_eq!(schema.fields[1].data_type, DataType::String);
//! ```

mod config;
mod detect;
mod error;
mod fold;
mod inferrer;
mod merge;
mod schema;
mod types;

pub use config::{FieldOptions, HeaderMismatchPolicy, InferenceConfig, InferenceConfigBuilder};
pub use detect::infer_field;
pub use error::InferenceError;
#[cfg(feature = "parallel")]
pub use fold::fold_parallel;
pub use fold::{Aggregate, ColumnTypeAggregate, PartialSchema, fold_partitions, fold_rows};
pub use inferrer::{SchemaBuilder, infer_schema, zip_fill, zip_truncate};
pub use merge::{combine_row, combine_row_with, finalize_vector, merge_vectors};
pub use schema::{InferenceStats, InferredSchema, SchemaField};
pub use types::{DataType, NUMERIC_PRECEDENCE, TypeVector, common_type};

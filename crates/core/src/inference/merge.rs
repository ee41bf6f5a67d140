//! Row aggregation and type vector merging
//!
//! `combine_row` folds one row into a running type vector and
//! `merge_vectors` combines two partial vectors. Together they form the
//! seq-op and comb-op of the inference fold.
//!
//! `merge_vectors` is the pointwise join of the total order
//! `Null < Byte < Short < Integer < Long < Float < Double < Decimal < String`,
//! which makes it associative and commutative with the empty vector as
//! identity. `Null` columns stay `Null` through merges and only become
//! `String` in [`finalize_vector`], once the whole fold is done.

use super::config::FieldOptions;
use super::detect::infer_field;
use super::types::{DataType, TypeVector, common_type};

/// Fold one row into `types` using default field options
pub fn combine_row<S: AsRef<str>>(types: &[DataType], row: &[Option<S>]) -> TypeVector {
    combine_row_with(types, row, &FieldOptions::default())
}

/// Fold one row into `types`.
///
/// Columns past the end of `types` start at `Null`; columns past the end of
/// `row` see an empty field and keep their type.
pub fn combine_row_with<S: AsRef<str>>(
    types: &[DataType],
    row: &[Option<S>],
    options: &FieldOptions,
) -> TypeVector {
    let width = types.len().max(row.len());
    (0..width)
        .map(|i| {
            let current = types.get(i).copied().unwrap_or(DataType::Null);
            let field = row.get(i).and_then(|f| f.as_ref().map(|s| s.as_ref()));
            infer_field(current, options.observe(field))
        })
        .collect()
}

/// Merge two partial type vectors into one.
///
/// Missing entries on either side count as `Null`. Pairs with no common type
/// fall back to `String`. `Null + Null` stays `Null`: coercing it here would
/// make the merge non-associative (`(Null·Null)·Integer` would be `String`
/// while `Null·(Null·Integer)` is `Integer`), so callers running their own
/// fold must finish with [`finalize_vector`] or [`SchemaBuilder::finish`].
///
/// [`SchemaBuilder::finish`]: crate::inference::SchemaBuilder::finish
pub fn merge_vectors(v1: &[DataType], v2: &[DataType]) -> TypeVector {
    let width = v1.len().max(v2.len());
    (0..width)
        .map(|i| {
            let a = v1.get(i).copied().unwrap_or(DataType::Null);
            let b = v2.get(i).copied().unwrap_or(DataType::Null);
            common_type(a, b).unwrap_or(DataType::String)
        })
        .collect()
}

/// Coerce every remaining `Null` to `String`
pub fn finalize_vector(types: &[DataType]) -> TypeVector {
    types
        .iter()
        .map(|t| match t {
            DataType::Null => DataType::String,
            other => *other,
        })
        .collect()
}

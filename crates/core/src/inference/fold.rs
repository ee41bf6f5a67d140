//! Fold contract between the inference core and an execution engine
//!
//! An engine that can run `aggregate(zero, seq_op, comb_op)` over any
//! partitioning of the rows gets the same result as a single sequential
//! pass, because `comb_op` is associative and commutative with `zero` as its
//! identity. The executors here cover the in-process cases: one sequential
//! pass, caller-supplied partitions, and rayon chunks.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::config::FieldOptions;
use super::merge::{combine_row_with, merge_vectors};
use super::types::TypeVector;

/// Aggregation over rows of optional text fields
pub trait Aggregate {
    /// Partial result type
    type Acc;

    /// Identity element of `comb_op`
    fn zero(&self) -> Self::Acc;

    /// Fold one row into a partial result
    fn seq_op<S: AsRef<str>>(&self, acc: Self::Acc, row: &[Option<S>]) -> Self::Acc;

    /// Combine two partial results; must be associative and commutative
    fn comb_op(&self, a: Self::Acc, b: Self::Acc) -> Self::Acc;
}

/// Partial inference result for some subset of the rows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialSchema {
    /// Running per-column types, not yet finalized
    pub types: TypeVector,
    /// Rows folded into this partial
    pub record_count: usize,
}

impl PartialSchema {
    /// Create an empty partial
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of columns seen so far
    pub fn width(&self) -> usize {
        self.types.len()
    }
}

/// Column type inference expressed as an [`Aggregate`]
#[derive(Debug, Clone, Copy)]
pub struct ColumnTypeAggregate<'a> {
    options: &'a FieldOptions,
}

impl<'a> ColumnTypeAggregate<'a> {
    /// Create an aggregate using the given field options
    pub fn new(options: &'a FieldOptions) -> Self {
        Self { options }
    }
}

impl Aggregate for ColumnTypeAggregate<'_> {
    type Acc = PartialSchema;

    fn zero(&self) -> PartialSchema {
        PartialSchema::new()
    }

    fn seq_op<S: AsRef<str>>(&self, acc: PartialSchema, row: &[Option<S>]) -> PartialSchema {
        PartialSchema {
            types: combine_row_with(&acc.types, row, self.options),
            record_count: acc.record_count + 1,
        }
    }

    fn comb_op(&self, a: PartialSchema, b: PartialSchema) -> PartialSchema {
        PartialSchema {
            types: merge_vectors(&a.types, &b.types),
            record_count: a.record_count + b.record_count,
        }
    }
}

/// Fold every row in order
pub fn fold_rows<A, R, S>(agg: &A, rows: &[R]) -> A::Acc
where
    A: Aggregate,
    R: AsRef<[Option<S>]>,
    S: AsRef<str>,
{
    rows.iter().fold(agg.zero(), |acc, row| agg.seq_op(acc, row.as_ref()))
}

/// Fold each partition independently, then combine the partials in order
pub fn fold_partitions<A, P, R, S>(agg: &A, partitions: &[P]) -> A::Acc
where
    A: Aggregate,
    P: AsRef<[R]>,
    R: AsRef<[Option<S>]>,
    S: AsRef<str>,
{
    partitions
        .iter()
        .map(|partition| fold_rows(agg, partition.as_ref()))
        .fold(agg.zero(), |a, b| agg.comb_op(a, b))
}

/// Fold chunks of `chunk_size` rows on the rayon pool and reduce the
/// partials in whatever order they complete
#[cfg(feature = "parallel")]
pub fn fold_parallel<A, R, S>(agg: &A, rows: &[R], chunk_size: usize) -> A::Acc
where
    A: Aggregate + Sync,
    A::Acc: Send,
    R: AsRef<[Option<S>]> + Sync,
    S: AsRef<str>,
{
    rows.par_chunks(chunk_size.max(1))
        .map(|chunk| fold_rows(agg, chunk))
        .reduce(|| agg.zero(), |a, b| agg.comb_op(a, b))
}

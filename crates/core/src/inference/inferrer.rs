//! Schema builder
//!
//! Runs the inference fold over the rows, finalizes the resulting type
//! vector, and pairs it with the header names.

use tracing::{debug, info, info_span, warn};

use super::config::{FieldOptions, HeaderMismatchPolicy, InferenceConfig};
use super::error::InferenceError;
#[cfg(feature = "parallel")]
use super::fold::fold_parallel;
use super::fold::{ColumnTypeAggregate, PartialSchema, fold_partitions, fold_rows};
use super::merge::finalize_vector;
use super::schema::{InferenceStats, InferredSchema, SchemaField};
use super::types::DataType;

/// Infer a schema from rows with default settings.
///
/// Never fails. When the header and the inferred column count differ, the
/// result is truncated to the shorter of the two and the dropped names or
/// columns are listed in [`InferredSchema::warnings`].
pub fn infer_schema<R, S, H>(rows: &[R], header: &[H]) -> InferredSchema
where
    R: AsRef<[Option<S>]>,
    S: AsRef<str>,
    H: AsRef<str>,
{
    let options = FieldOptions::default();
    let partial = fold_rows(&ColumnTypeAggregate::new(&options), rows);
    let types = finalize_vector(&partial.types);
    let (fields, warnings) = zip_truncate(&types, header);
    assemble(&partial, header.len(), fields, warnings)
}

/// Pair types with header names, stopping at the shorter of the two.
///
/// Returns the fields and a warning for whatever was dropped.
pub fn zip_truncate<H: AsRef<str>>(
    types: &[DataType],
    header: &[H],
) -> (Vec<SchemaField>, Vec<String>) {
    let fields = header
        .iter()
        .zip(types)
        .map(|(name, data_type)| SchemaField::new(name.as_ref(), *data_type))
        .collect();

    let mut warnings = Vec::new();
    if types.len() > header.len() {
        let message = format!(
            "{} inferred column(s) at positions {}..{} have no header name and were dropped",
            types.len() - header.len(),
            header.len(),
            types.len()
        );
        warn!(
            columns = types.len(),
            header = header.len(),
            "{}",
            message
        );
        warnings.push(message);
    } else if header.len() > types.len() {
        let dropped: Vec<&str> = header[types.len()..].iter().map(|h| h.as_ref()).collect();
        let message = format!(
            "header name(s) with no inferred column were dropped: {}",
            dropped.join(", ")
        );
        warn!(
            columns = types.len(),
            header = header.len(),
            "{}",
            message
        );
        warnings.push(message);
    }

    (fields, warnings)
}

/// Pair types with header names, inventing names or types for the surplus.
///
/// Columns without a name are called `_c{index}`; names without a column
/// never saw data and get `String`.
pub fn zip_fill<H: AsRef<str>>(types: &[DataType], header: &[H]) -> Vec<SchemaField> {
    let width = types.len().max(header.len());
    (0..width)
        .map(|i| {
            let name = header
                .get(i)
                .map(|h| h.as_ref().to_string())
                .unwrap_or_else(|| format!("_c{}", i));
            let data_type = types.get(i).copied().unwrap_or(DataType::String);
            SchemaField::new(name, data_type)
        })
        .collect()
}

fn assemble(
    partial: &PartialSchema,
    header_names: usize,
    fields: Vec<SchemaField>,
    warnings: Vec<String>,
) -> InferredSchema {
    let stats = InferenceStats {
        records_processed: partial.record_count,
        columns_inferred: partial.width(),
        header_names,
    };

    info!(
        records = stats.records_processed,
        columns = stats.columns_inferred,
        fields = fields.len(),
        "Schema inference complete"
    );

    InferredSchema {
        fields,
        stats,
        warnings,
    }
}

/// Schema inference engine
///
/// Holds the configuration and offers sequential, partitioned and parallel
/// runs of the same fold.
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    config: InferenceConfig,
}

impl SchemaBuilder {
    /// Create a new schema builder with default configuration
    pub fn new() -> Self {
        Self::with_config(InferenceConfig::default())
    }

    /// Create a new schema builder with custom configuration
    pub fn with_config(config: InferenceConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// The seq-op/comb-op pair for an external execution engine
    pub fn aggregate(&self) -> ColumnTypeAggregate<'_> {
        ColumnTypeAggregate::new(&self.config.fields)
    }

    /// Infer a schema with a single sequential fold
    pub fn infer<R, S, H>(&self, rows: &[R], header: &[H]) -> Result<InferredSchema, InferenceError>
    where
        R: AsRef<[Option<S>]>,
        S: AsRef<str>,
        H: AsRef<str>,
    {
        self.config.validate()?;
        let _span = info_span!("schema_inference", mode = "sequential").entered();

        let rows = &rows[..self.config.effective_rows(rows.len())];
        debug!(rows = rows.len(), "Folding rows");
        let partial = fold_rows(&self.aggregate(), rows);
        self.finish(partial, header)
    }

    /// Infer a schema from caller-supplied partitions.
    ///
    /// Each partition is folded on its own and the partials are combined,
    /// which yields the same schema as folding all rows in sequence. The
    /// sample size, if set, is applied across partitions in order.
    pub fn infer_partitions<P, R, S, H>(
        &self,
        partitions: &[P],
        header: &[H],
    ) -> Result<InferredSchema, InferenceError>
    where
        P: AsRef<[R]>,
        R: AsRef<[Option<S>]>,
        S: AsRef<str>,
        H: AsRef<str>,
    {
        self.config.validate()?;
        let _span = info_span!("schema_inference", mode = "partitioned").entered();

        let mut budget = self.config.effective_rows(usize::MAX);
        let sampled: Vec<&[R]> = partitions
            .iter()
            .map(|partition| {
                let rows = partition.as_ref();
                let take = rows.len().min(budget);
                budget -= take;
                &rows[..take]
            })
            .collect();
        debug!(partitions = sampled.len(), "Folding partitions");

        let partial = fold_partitions(&self.aggregate(), &sampled);
        self.finish(partial, header)
    }

    /// Infer a schema by folding chunks of `partition_size` rows on the
    /// rayon thread pool
    #[cfg(feature = "parallel")]
    pub fn infer_parallel<R, S, H>(
        &self,
        rows: &[R],
        header: &[H],
    ) -> Result<InferredSchema, InferenceError>
    where
        R: AsRef<[Option<S>]> + Sync,
        S: AsRef<str>,
        H: AsRef<str>,
    {
        self.config.validate()?;
        let _span = info_span!("schema_inference", mode = "parallel").entered();

        let rows = &rows[..self.config.effective_rows(rows.len())];
        debug!(
            rows = rows.len(),
            chunk_size = self.config.partition_size,
            threads = rayon::current_num_threads(),
            "Folding rows in parallel"
        );
        let partial = fold_parallel(&self.aggregate(), rows, self.config.partition_size);
        self.finish(partial, header)
    }

    /// Turn a partial result into a schema.
    ///
    /// Use this when the fold ran elsewhere, e.g. in an external engine
    /// driving [`SchemaBuilder::aggregate`].
    pub fn finish<H: AsRef<str>>(
        &self,
        partial: PartialSchema,
        header: &[H],
    ) -> Result<InferredSchema, InferenceError> {
        let types = finalize_vector(&partial.types);

        let (fields, warnings) = if types.len() == header.len() {
            zip_truncate(&types, header)
        } else {
            match self.config.header_mismatch {
                HeaderMismatchPolicy::Truncate => zip_truncate(&types, header),
                HeaderMismatchPolicy::Reject => {
                    return Err(InferenceError::HeaderMismatch {
                        header: header.len(),
                        columns: types.len(),
                    });
                }
                HeaderMismatchPolicy::FillNames => {
                    debug!(
                        columns = types.len(),
                        header = header.len(),
                        "Filling surplus header names and columns"
                    );
                    (zip_fill(&types, header), Vec::new())
                }
            }
        };

        Ok(assemble(&partial, header.len(), fields, warnings))
    }
}

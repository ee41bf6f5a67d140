//! CLI command for schema inference

use std::path::PathBuf;

use column_schema_core::{HeaderMismatchPolicy, InferenceConfig, InferredSchema, SchemaBuilder};
use tracing::info;

use crate::error::CliError;
use crate::input::{load_input, split_delimited};
use crate::output::{OutputFormat, format_schema};

/// Arguments for the `infer` command
#[derive(Debug, Clone)]
pub struct InferArgs {
    /// Input file path, or `-` for stdin
    pub input: String,
    /// Field delimiter
    pub delimiter: char,
    /// Whether the first line holds column names
    pub has_header: bool,
    /// Extra tokens treated as empty fields
    pub null_values: Vec<String>,
    /// Trim whitespace around fields before detection
    pub trim: bool,
    /// Max rows to read, 0 for all
    pub sample_size: usize,
    /// Rows per parallel chunk
    pub partition_size: usize,
    /// Run a single sequential fold instead of the parallel one
    pub sequential: bool,
    /// What to do when the header and inferred widths differ
    pub header_mismatch: HeaderMismatchPolicy,
    /// Output format
    pub format: OutputFormat,
    /// Output file path (stdout if not provided)
    pub output: Option<PathBuf>,
}

impl Default for InferArgs {
    fn default() -> Self {
        Self {
            input: "-".to_string(),
            delimiter: ',',
            has_header: true,
            null_values: Vec::new(),
            trim: false,
            sample_size: 0,
            partition_size: 1024,
            sequential: false,
            header_mismatch: HeaderMismatchPolicy::default(),
            format: OutputFormat::default(),
            output: None,
        }
    }
}

impl InferArgs {
    fn config(&self) -> InferenceConfig {
        InferenceConfig::builder()
            .sample_size(self.sample_size)
            .null_values(self.null_values.iter().cloned())
            .trim_whitespace(self.trim)
            .header_mismatch(self.header_mismatch)
            .partition_size(self.partition_size)
            .build()
    }
}

/// Infer a schema from delimited text already in memory
pub fn infer_from_str(content: &str, args: &InferArgs) -> Result<InferredSchema, CliError> {
    let input = split_delimited(content, args.delimiter, args.has_header)?;
    let builder = SchemaBuilder::with_config(args.config());

    let schema = if args.sequential {
        builder.infer(&input.rows, &input.header)?
    } else {
        builder.infer_parallel(&input.rows, &input.header)?
    };
    Ok(schema)
}

/// Handle the `infer` command
pub fn handle_infer(args: &InferArgs) -> Result<(), CliError> {
    let content = load_input(&args.input)?;

    eprintln!("Inferring schema from {}...", display_input(&args.input));
    eprintln!("  Delimiter: {:?}", args.delimiter);
    if args.sample_size > 0 {
        eprintln!("  Sample size: {}", args.sample_size);
    }
    eprintln!(
        "  Mode: {}",
        if args.sequential {
            "sequential"
        } else {
            "parallel"
        }
    );

    let schema = infer_from_str(&content, args)?;

    eprintln!();
    eprintln!("Inference complete:");
    eprintln!("  Records processed: {}", schema.stats.records_processed);
    eprintln!("  Columns inferred: {}", schema.stats.columns_inferred);

    let output_str = format_schema(&schema, args.format)?;

    if let Some(ref output_path) = args.output {
        std::fs::write(output_path, &output_str)
            .map_err(|e| CliError::FileWriteError(output_path.clone(), e.to_string()))?;
        info!(path = %output_path.display(), "Schema written");
        eprintln!();
        eprintln!("Schema written to: {}", output_path.display());
    } else {
        println!("{}", output_str);
    }

    Ok(())
}

fn display_input(input: &str) -> &str {
    if input == "-" { "stdin" } else { input }
}

#[cfg(test)]
mod tests {
    use super::*;
    use column_schema_core::DataType;

    #[test]
    fn test_infer_from_str() {
        let content = "id,price,label\n1,9.99,a\n2,,b\n3,12,\n";
        let schema = infer_from_str(content, &InferArgs::default()).unwrap();
        assert_eq!(
            schema.data_types(),
            vec![DataType::Integer, DataType::Double, DataType::String]
        );
        assert_eq!(schema.stats.records_processed, 3);
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let content: String = std::iter::once("a;b".to_string())
            .chain((0..200).map(|i| format!("{};{}", i, i as i64 * 100_000_000)))
            .collect::<Vec<_>>()
            .join("\n");
        let parallel_args = InferArgs {
            delimiter: ';',
            partition_size: 7,
            ..InferArgs::default()
        };
        let sequential_args = InferArgs {
            sequential: true,
            ..parallel_args.clone()
        };

        let parallel = infer_from_str(&content, &parallel_args).unwrap();
        let sequential = infer_from_str(&content, &sequential_args).unwrap();
        assert_eq!(parallel, sequential);
        assert_eq!(
            sequential.data_types(),
            vec![DataType::Integer, DataType::Long]
        );
    }

    #[test]
    fn test_no_header_and_null_tokens() {
        let args = InferArgs {
            has_header: false,
            null_values: vec!["NA".to_string()],
            ..InferArgs::default()
        };
        let schema = infer_from_str("1,NA\n2,3.5\n", &args).unwrap();
        let names: Vec<&str> = schema.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["_c0", "_c1"]);
        assert_eq!(
            schema.data_types(),
            vec![DataType::Integer, DataType::Double]
        );
    }

    #[test]
    fn test_reject_mismatch() {
        let args = InferArgs {
            header_mismatch: HeaderMismatchPolicy::Reject,
            ..InferArgs::default()
        };
        let result = infer_from_str("a\n1,2\n", &args);
        assert!(matches!(result, Err(CliError::InferenceError(_))));
    }

    #[test]
    fn test_quoted_delimiter_keeps_columns_aligned() {
        let content = "name,age\n\"Smith, John\",42\n\"Doe, Jane\",37\n";

        let schema = infer_from_str(content, &InferArgs::default()).unwrap();
        assert_eq!(
            schema.data_types(),
            vec![DataType::String, DataType::Integer]
        );
        assert!(schema.warnings.is_empty());

        let args = InferArgs {
            header_mismatch: HeaderMismatchPolicy::Reject,
            ..InferArgs::default()
        };
        let schema = infer_from_str(content, &args).unwrap();
        assert_eq!(schema.field("age").unwrap().data_type, DataType::Integer);
    }

    #[test]
    fn test_invalid_partition_size() {
        let args = InferArgs {
            partition_size: 0,
            ..InferArgs::default()
        };
        assert!(infer_from_str("a\n1\n", &args).is_err());
    }
}

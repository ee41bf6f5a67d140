//! Output formatting for CLI

use clap::ValueEnum;
use column_schema_core::InferredSchema;

use crate::error::CliError;

/// Output format for an inferred schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned column listing
    #[default]
    Table,
    /// Schema as JSON
    Json,
    /// Schema as YAML
    Yaml,
    /// JSON Schema (draft 2020-12)
    JsonSchema,
}

/// Render a schema in the requested format
pub fn format_schema(schema: &InferredSchema, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Table => Ok(format_table_output(schema)),
        OutputFormat::Json => serde_json::to_string_pretty(schema)
            .map_err(|e| CliError::SerializationError(e.to_string())),
        OutputFormat::Yaml => {
            serde_yaml::to_string(schema).map_err(|e| CliError::SerializationError(e.to_string()))
        }
        OutputFormat::JsonSchema => serde_json::to_string_pretty(&schema.to_json_schema())
            .map_err(|e| CliError::SerializationError(e.to_string())),
    }
}

/// Format a schema as an aligned table
pub fn format_table_output(schema: &InferredSchema) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Inferred Schema ({} columns, {} records)\n",
        schema.len(),
        schema.stats.records_processed
    ));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let name_width = schema
        .fields
        .iter()
        .map(|f| f.name.len())
        .chain(std::iter::once("Column".len()))
        .max()
        .unwrap_or(0);

    output.push_str(&format!(
        "  {:<name_width$}  {:<8}  Nullable\n",
        "Column", "Type"
    ));
    for field in &schema.fields {
        output.push_str(&format!(
            "  {:<name_width$}  {:<8}  {}\n",
            field.name,
            field.data_type.type_name(),
            field.nullable
        ));
    }

    if !schema.warnings.is_empty() {
        output.push_str("\n⚠️  Warnings:\n");
        for warning in &schema.warnings {
            output.push_str(&format!("  - {}\n", warning));
        }
    }

    output
}

//! Reading and splitting delimited input

use std::io::Read;
use std::path::PathBuf;

use tracing::debug;

use crate::error::CliError;

/// Header and rows split out of delimited text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelimitedInput {
    /// Column names, from the first line or positional
    pub header: Vec<String>,
    /// Data rows; empty fields are `None`
    pub rows: Vec<Vec<Option<String>>>,
}

/// Load input from a file path, or from stdin when `input` is `-`
pub fn load_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        Ok(content)
    } else {
        let path = PathBuf::from(input);
        std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError(path, e.to_string()))
    }
}

/// Parse a delimiter argument.
///
/// Accepts a single ASCII character, or `\t` / `tab` for a tab.
pub fn parse_delimiter(value: &str) -> Result<char, String> {
    match value {
        "\\t" | "tab" => Ok('\t'),
        _ => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => Ok(c),
                _ => Err(format!(
                    "delimiter must be a single ASCII character, got '{}'",
                    value
                )),
            }
        }
    }
}

fn make_reader_builder(delimiter: u8, has_header: bool) -> csv::ReaderBuilder {
    let mut rb = csv::ReaderBuilder::new();
    rb.delimiter(delimiter)
        .has_headers(has_header)
        // Rows may be ragged; width differences are resolved by inference
        .flexible(true);
    rb
}

/// Split delimited text into a header and rows.
///
/// Fields follow CSV quoting rules, so a quoted field may contain the
/// delimiter or a line break. Blank lines are skipped. Without a header
/// line, names are positional (`_c0`, `_c1`, ...) and cover the widest row.
pub fn split_delimited(
    content: &str,
    delimiter: char,
    has_header: bool,
) -> Result<DelimitedInput, CliError> {
    if !delimiter.is_ascii() {
        return Err(CliError::InvalidArgument(format!(
            "delimiter must be a single ASCII character, got '{}'",
            delimiter
        )));
    }
    let delimiter = delimiter as u8;
    let mut reader = make_reader_builder(delimiter, has_header).from_reader(content.as_bytes());

    let named: Option<Vec<String>> = if has_header {
        let headers = reader
            .headers()
            .map_err(|e| CliError::ParseError(format!("CSV header error: {}", e)))?;
        Some(headers.iter().map(|s| s.to_string()).collect())
    } else {
        None
    };

    let mut rows: Vec<Vec<Option<String>>> = Vec::new();
    let mut record = csv::StringRecord::new();
    while reader
        .read_record(&mut record)
        .map_err(|e| CliError::ParseError(format!("CSV parse error: {}", e)))?
    {
        rows.push(
            record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        None
                    } else {
                        Some(field.to_string())
                    }
                })
                .collect(),
        );
    }

    let header = named.unwrap_or_else(|| {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        (0..width).map(|i| format!("_c{}", i)).collect()
    });

    debug!(
        rows = rows.len(),
        columns = header.len(),
        has_header,
        "Split delimited input"
    );

    Ok(DelimitedInput { header, rows })
}

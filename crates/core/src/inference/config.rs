//! Configuration for schema inference

use serde::{Deserialize, Serialize};

use super::error::InferenceError;

/// What to do when the header and the inferred column count disagree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeaderMismatchPolicy {
    /// Zip to the shorter of the two and record a warning
    #[default]
    Truncate,
    /// Fail with [`InferenceError::HeaderMismatch`]
    Reject,
    /// Name surplus columns `_c{index}`, type surplus names as `String`
    FillNames,
}

impl std::fmt::Display for HeaderMismatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeaderMismatchPolicy::Truncate => write!(f, "truncate"),
            HeaderMismatchPolicy::Reject => write!(f, "reject"),
            HeaderMismatchPolicy::FillNames => write!(f, "fill"),
        }
    }
}

impl std::str::FromStr for HeaderMismatchPolicy {
    type Err = InferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "truncate" => Ok(HeaderMismatchPolicy::Truncate),
            "reject" => Ok(HeaderMismatchPolicy::Reject),
            "fill" | "fill-names" => Ok(HeaderMismatchPolicy::FillNames),
            _ => Err(InferenceError::InvalidConfig(format!(
                "unknown header mismatch policy: {}",
                s
            ))),
        }
    }
}

/// Per-field preprocessing applied before type detection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOptions {
    /// Tokens treated as empty, in addition to the zero-length string
    pub null_values: Vec<String>,
    /// Trim surrounding whitespace before detection
    pub trim_whitespace: bool,
}

impl FieldOptions {
    /// Reduce a raw field to the text type detection should see.
    ///
    /// Returns `None` when the field carries no information.
    pub fn observe<'a>(&self, field: Option<&'a str>) -> Option<&'a str> {
        let mut field = field?;
        if self.trim_whitespace {
            field = field.trim();
        }
        if field.is_empty() || self.null_values.iter().any(|n| n == field) {
            return None;
        }
        Some(field)
    }
}

/// Configuration for schema inference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceConfig {
    /// Maximum number of rows to sample (0 = all)
    pub sample_size: usize,

    /// Field preprocessing
    pub fields: FieldOptions,

    /// Handling of header/column count disagreement
    pub header_mismatch: HeaderMismatchPolicy,

    /// Rows per chunk for partitioned and parallel folds
    pub partition_size: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            sample_size: 0, // All rows
            fields: FieldOptions::default(),
            header_mismatch: HeaderMismatchPolicy::Truncate,
            partition_size: 1024,
        }
    }
}

impl InferenceConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> InferenceConfigBuilder {
        InferenceConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), InferenceError> {
        if self.partition_size == 0 {
            return Err(InferenceError::InvalidConfig(
                "partition size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of rows to read from a source of `available` rows
    pub fn effective_rows(&self, available: usize) -> usize {
        if self.sample_size == 0 {
            available
        } else {
            available.min(self.sample_size)
        }
    }
}

/// Builder for InferenceConfig
#[derive(Debug, Default)]
pub struct InferenceConfigBuilder {
    config: InferenceConfig,
}

impl InferenceConfigBuilder {
    /// Set the sample size (0 = all rows)
    pub fn sample_size(mut self, size: usize) -> Self {
        self.config.sample_size = size;
        self
    }

    /// Add a token that should be read as an empty field
    pub fn null_value(mut self, token: impl Into<String>) -> Self {
        self.config.fields.null_values.push(token.into());
        self
    }

    /// Replace the set of null tokens
    pub fn null_values<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.fields.null_values = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable whitespace trimming
    pub fn trim_whitespace(mut self, trim: bool) -> Self {
        self.config.fields.trim_whitespace = trim;
        self
    }

    /// Set the header mismatch policy
    pub fn header_mismatch(mut self, policy: HeaderMismatchPolicy) -> Self {
        self.config.header_mismatch = policy;
        self
    }

    /// Set the partition size used by partitioned folds
    pub fn partition_size(mut self, size: usize) -> Self {
        self.config.partition_size = size;
        self
    }

    /// Build the configuration
    pub fn build(self) -> InferenceConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InferenceConfig::default();
        assert_eq!(config.sample_size, 0);
        assert_eq!(config.header_mismatch, HeaderMismatchPolicy::Truncate);
        assert!(config.fields.null_values.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = InferenceConfig::builder()
            .sample_size(1000)
            .null_value("NA")
            .null_value("null")
            .trim_whitespace(true)
            .header_mismatch(HeaderMismatchPolicy::Reject)
            .partition_size(64)
            .build();

        assert_eq!(config.sample_size, 1000);
        assert_eq!(config.fields.null_values, vec!["NA", "null"]);
        assert!(config.fields.trim_whitespace);
        assert_eq!(config.header_mismatch, HeaderMismatchPolicy::Reject);
        assert_eq!(config.partition_size, 64);
    }

    #[test]
    fn test_zero_partition_size_rejected() {
        let config = InferenceConfig::builder().partition_size(0).build();
        assert!(matches!(
            config.validate(),
            Err(InferenceError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_effective_rows() {
        let config = InferenceConfig::builder().sample_size(10).build();
        assert_eq!(config.effective_rows(100), 10);
        assert_eq!(config.effective_rows(3), 3);
        assert_eq!(InferenceConfig::default().effective_rows(100), 100);
    }

    #[test]
    fn test_observe_field() {
        let opts = FieldOptions {
            null_values: vec!["NA".to_string()],
            trim_whitespace: true,
        };
        assert_eq!(opts.observe(None), None);
        assert_eq!(opts.observe(Some("")), None);
        assert_eq!(opts.observe(Some("  ")), None);
        assert_eq!(opts.observe(Some(" NA ")), None);
        assert_eq!(opts.observe(Some(" 12 ")), Some("12"));

        let raw = FieldOptions::default();
        assert_eq!(raw.observe(Some(" 12 ")), Some(" 12 "));
        assert_eq!(raw.observe(Some("NA")), Some("NA"));
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!(
            "Fill".parse::<HeaderMismatchPolicy>().unwrap(),
            HeaderMismatchPolicy::FillNames
        );
        assert!("drop".parse::<HeaderMismatchPolicy>().is_err());
        assert_eq!(HeaderMismatchPolicy::Reject.to_string(), "reject");
    }

    #[test]
    fn test_config_serde() {
        let config = InferenceConfig::builder().null_value("-").build();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"nullValues\""));
        let back: InferenceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}

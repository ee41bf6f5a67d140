//! Column data types and the lattice they form
//!
//! `Null` is the bottom of the lattice and `String` the top. Between them the
//! numeric types form a single chain ordered by generality:
//! `Byte < Short < Integer < Long < Float < Double < Decimal`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::InferenceError;

/// Data type inferred for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataType {
    /// No non-empty value observed yet
    Null,
    /// 8-bit signed integer
    Byte,
    /// 16-bit signed integer
    Short,
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    Long,
    /// 32-bit floating point
    Float,
    /// 64-bit floating point
    Double,
    /// Arbitrary precision decimal
    Decimal,
    /// Text; absorbs every other type
    String,
}

/// Per-column types, index-aligned with field position
pub type TypeVector = Vec<DataType>;

/// The numeric precedence chain, least general first
pub const NUMERIC_PRECEDENCE: [DataType; 7] = [
    DataType::Byte,
    DataType::Short,
    DataType::Integer,
    DataType::Long,
    DataType::Float,
    DataType::Double,
    DataType::Decimal,
];

impl DataType {
    /// All variants in lattice order
    pub const ALL: [DataType; 9] = [
        DataType::Null,
        DataType::Byte,
        DataType::Short,
        DataType::Integer,
        DataType::Long,
        DataType::Float,
        DataType::Double,
        DataType::Decimal,
        DataType::String,
    ];

    /// Position in the numeric precedence chain, `None` for non-numeric types
    pub fn precedence(self) -> Option<usize> {
        NUMERIC_PRECEDENCE.iter().position(|t| *t == self)
    }

    /// Whether this type is a member of the numeric chain
    pub fn is_numeric(self) -> bool {
        self.precedence().is_some()
    }

    /// Whether this is one of the integral numeric types
    pub fn is_integral(self) -> bool {
        matches!(
            self,
            DataType::Byte | DataType::Short | DataType::Integer | DataType::Long
        )
    }

    /// Lowercase name used for display and parsing
    pub fn type_name(self) -> &'static str {
        match self {
            DataType::Null => "null",
            DataType::Byte => "byte",
            DataType::Short => "short",
            DataType::Integer => "integer",
            DataType::Long => "long",
            DataType::Float => "float",
            DataType::Double => "double",
            DataType::Decimal => "decimal",
            DataType::String => "string",
        }
    }

    /// JSON Schema `type` keyword for values of this type
    pub fn json_schema_type(self) -> &'static str {
        match self {
            DataType::Null => "null",
            DataType::Byte | DataType::Short | DataType::Integer | DataType::Long => "integer",
            DataType::Float | DataType::Double | DataType::Decimal => "number",
            DataType::String => "string",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

impl FromStr for DataType {
    type Err = InferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        DataType::ALL
            .into_iter()
            .find(|t| t.type_name() == lower)
            .ok_or_else(|| InferenceError::UnknownType(s.to_string()))
    }
}

/// Find the tightest type both `t1` and `t2` widen to.
///
/// Returns `None` when the two types share no common representable type
/// short of `String` (e.g. `String` against `Double`). The function is
/// symmetric and agrees with the numeric chain order.
pub fn common_type(t1: DataType, t2: DataType) -> Option<DataType> {
    match (t1, t2) {
        (a, b) if a == b => Some(a),
        (DataType::Null, other) | (other, DataType::Null) => Some(other),
        (a, b) => match (a.precedence(), b.precedence()) {
            (Some(pa), Some(pb)) => Some(if pa >= pb { a } else { b }),
            _ => None,
        },
    }
}

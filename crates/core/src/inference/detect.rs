//! Per-field type detection
//!
//! A field narrows the running guess for its column by walking a parse
//! ladder that starts at the rung of the current guess. Narrower rungs are
//! never retried, so a column only ever widens.

use super::types::DataType;

fn parses_as_integer(field: &str) -> bool {
    field.parse::<i32>().is_ok()
}

fn parses_as_long(field: &str) -> bool {
    field.parse::<i64>().is_ok()
}

fn parses_as_double(field: &str) -> bool {
    field.parse::<f64>().is_ok()
}

fn from_integer_rung(field: &str) -> DataType {
    if parses_as_integer(field) {
        DataType::Integer
    } else {
        from_long_rung(field)
    }
}

fn from_long_rung(field: &str) -> DataType {
    if parses_as_long(field) {
        DataType::Long
    } else {
        from_double_rung(field)
    }
}

fn from_double_rung(field: &str) -> DataType {
    if parses_as_double(field) {
        DataType::Double
    } else {
        DataType::String
    }
}

/// Narrow `type_so_far` using one raw field value.
///
/// Absent or empty fields carry no information and return `type_so_far`
/// unchanged.
pub fn infer_field(type_so_far: DataType, field: Option<&str>) -> DataType {
    let field = match field {
        Some(f) if !f.is_empty() => f,
        _ => return type_so_far,
    };

    match type_so_far {
        DataType::String => DataType::String,
        DataType::Null | DataType::Byte | DataType::Short | DataType::Integer => {
            from_integer_rung(field)
        }
        DataType::Long => from_long_rung(field),
        DataType::Float | DataType::Double => from_double_rung(field),
        DataType::Decimal => {
            if parses_as_double(field) {
                DataType::Decimal
            } else {
                DataType::String
            }
        }
    }
}

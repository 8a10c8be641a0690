//! Helpers over `serde_json::Value` shared by validation and coercion.

use serde_json::{Number, Value};

/// Get a human-readable type name for a value.
pub(crate) fn json_type_name(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "bool".to_string(),
        Value::Number(n) if is_integral_number(n) => "int".to_string(),
        Value::Number(_) => "float".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}

pub(crate) fn is_integral(value: &Value) -> bool {
    matches!(value, Value::Number(n) if is_integral_number(n))
}

fn is_integral_number(n: &Number) -> bool {
    n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
}

pub(crate) fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::Bool(_) | Value::Number(_) | Value::String(_))
}

/// Value equality for scalars, comparing numbers numerically.
pub(crate) fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_i64(), y.as_i64()) {
            (Some(x), Some(y)) => x == y,
            _ => x.as_f64() == y.as_f64(),
        },
        _ => a == b,
    }
}

/// Render a number the way a string field expects: integral values without a
/// fractional part, everything else in shortest round-trip form.
pub(crate) fn number_to_string(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        #[allow(clippy::cast_possible_truncation)]
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

pub(crate) fn is_nonzero(n: &Number) -> bool {
    match n.as_i64() {
        Some(i) => i != 0,
        None => n.as_f64().is_some_and(|f| f != 0.0),
    }
}

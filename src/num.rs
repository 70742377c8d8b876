use serde_json::{Number, Value};

// 2^63 and 2^64 are exact as f64.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
const U64_BOUND: f64 = 18_446_744_073_709_551_616.0;

/// Collapse integral floats to integers, recursively.
///
/// `5.0`, `1e2` and `-0` all read back as plain integers, so an option
/// value does not depend on how the number was spelled.
pub fn canonicalize_numbers(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize_numbers).collect()),
        Value::Object(map) => {
            let mapped = map
                .into_iter()
                .map(|(key, value)| (key, canonicalize_numbers(value)))
                .collect();
            Value::Object(mapped)
        }
        Value::Number(number) => Value::Number(canonical_number(number)),
        other => other,
    }
}

fn canonical_number(number: Number) -> Number {
    if !number.is_f64() {
        return number;
    }
    let Some(float) = number.as_f64() else {
        return number;
    };
    if !float.is_finite() || float.fract() != 0.0 {
        return number;
    }
    if float >= -I64_BOUND && float < I64_BOUND {
        return Number::from(float as i64);
    }
    if float >= 0.0 && float < U64_BOUND {
        return Number::from(float as u64);
    }
    number
}

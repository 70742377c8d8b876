use serde_json::Value;
use tracing::{debug, trace};

use crate::num::canonicalize_numbers;
use crate::options::ParseOptions;
use crate::parse::relaxed::parse_relaxed;

/// Coerce one token into a typed value.
///
/// JSON wins when the token is valid JSON; object and array literals get a
/// second chance through the relaxed normalizer; anything else stays a
/// string. Integral numbers come back as integers however they were
/// spelled (`5.0`, `1e2`). This never fails.
///
/// # Examples
/// ```
/// use argline::{coerce_value, ParseOptions};
/// use serde_json::json;
///
/// let options = ParseOptions::default();
/// assert_eq!(coerce_value("5", &options), json!(5));
/// assert_eq!(coerce_value("on", &options), json!("on"));
/// assert_eq!(coerce_value("{a:'b'}", &options), json!({"a": "b"}));
/// ```
pub fn coerce_value(token: &str, options: &ParseOptions) -> Value {
    if token.is_empty() {
        return Value::String(String::new());
    }

    let value = canonicalize_numbers(if let Some(inner) = strip_double_quotes(token) {
        if looks_like_literal(inner) {
            parse_literal(inner, options)
        } else {
            match serde_json::from_str::<Value>(token) {
                Ok(value) => value,
                Err(_) => Value::String(inner.to_string()),
            }
        }
    } else if looks_like_literal(token) {
        parse_literal(token, options)
    } else {
        match serde_json::from_str::<Value>(token) {
            Ok(Value::Null) | Err(_) => Value::String(token.to_string()),
            Ok(value) => value,
        }
    });

    trace!(token, ?value, "coerced value");
    value
}

/// True when the text is wrapped in a matching `{}` or `[]` pair.
pub(crate) fn looks_like_literal(text: &str) -> bool {
    (text.starts_with('{') && text.ends_with('}')) || (text.starts_with('[') && text.ends_with(']'))
}

fn strip_double_quotes(token: &str) -> Option<&str> {
    if !token.starts_with('"') || !token.ends_with('"') {
        return None;
    }
    // A lone `"` opens and closes itself.
    Some(token.get(1..token.len() - 1).unwrap_or(""))
}

fn parse_literal(text: &str, options: &ParseOptions) -> Value {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return value;
    }
    if options.relaxed {
        match parse_relaxed(text) {
            Ok(value) => return value,
            Err(err) => debug!(text, %err, "relaxed literal kept as string"),
        }
    } else {
        debug!(text, "non-strict literal kept as string");
    }
    Value::String(text.to_string())
}

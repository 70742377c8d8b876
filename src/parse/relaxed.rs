//! Rewrites relaxed object/array literals (single quotes, bare keys) into
//! text a strict JSON parser accepts.

use serde_json::Value;

use crate::constants::{is_identifier_continue, is_identifier_start};

/// Normalize a relaxed literal and parse it as strict JSON.
pub fn parse_relaxed(text: &str) -> serde_json::Result<Value> {
    serde_json::from_str(&normalize_relaxed(text))
}

/// Apply quote normalization followed by identifier quoting.
///
/// # Examples
/// ```
/// use argline::normalize_relaxed;
///
/// assert_eq!(normalize_relaxed("{xyz:'123'}"), r#"{"xyz":"123"}"#);
/// ```
pub fn normalize_relaxed(text: &str) -> String {
    quote_identifiers(&normalize_quotes(text))
}

/// Turn single-quoted runs into double-quoted ones.
///
/// Escaped characters are copied unchanged, and a single quote inside a
/// double-quoted run is left alone (and vice versa).
pub fn normalize_quotes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_single_quote = false;
    let mut in_double_quote = false;
    let mut escape_next = false;

    for ch in text.chars() {
        if escape_next {
            result.push(ch);
            escape_next = false;
            continue;
        }
        match ch {
            '\\' => {
                escape_next = true;
                result.push(ch);
            }
            '\'' if !in_double_quote => {
                in_single_quote = !in_single_quote;
                result.push('"');
            }
            '"' if !in_single_quote => {
                in_double_quote = !in_double_quote;
                result.push(ch);
            }
            _ => result.push(ch),
        }
    }

    result
}

/// Wrap bare identifiers used as object keys in double quotes.
///
/// A key is an identifier that follows `{` or `,` and precedes `:`, with
/// optional whitespace on either side. Whitespace between the key and the
/// colon is dropped. Values are never touched.
pub fn quote_identifiers(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len() + 8);
    let mut index = 0;

    while index < chars.len() {
        let ch = chars[index];
        result.push(ch);
        index += 1;
        if ch != '{' && ch != ',' {
            continue;
        }
        if let Some(key) = match_bare_key(&chars, index) {
            result.extend(&chars[index..key.start]);
            result.push('"');
            result.extend(&chars[key.start..key.end]);
            result.push_str("\":");
            index = key.resume;
        }
    }

    result
}

struct BareKey {
    start: usize,
    end: usize,
    resume: usize,
}

fn match_bare_key(chars: &[char], from: usize) -> Option<BareKey> {
    let mut cursor = skip_whitespace(chars, from);
    let start = cursor;
    match chars.get(cursor) {
        Some(&ch) if is_identifier_start(ch) => cursor += 1,
        _ => return None,
    }
    while cursor < chars.len() && is_identifier_continue(chars[cursor]) {
        cursor += 1;
    }
    let end = cursor;
    cursor = skip_whitespace(chars, cursor);
    if chars.get(cursor) != Some(&':') {
        return None;
    }
    Some(BareKey {
        start,
        end,
        resume: cursor + 1,
    })
}

fn skip_whitespace(chars: &[char], mut cursor: usize) -> usize {
    while cursor < chars.len() && chars[cursor].is_whitespace() {
        cursor += 1;
    }
    cursor
}

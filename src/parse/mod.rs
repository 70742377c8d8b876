pub mod relaxed;
pub mod tokenizer;
pub mod value;

use memchr::memmem;
use serde_json::Value;
use smallvec::SmallVec;
use tracing::debug;

use crate::args::ParsedArguments;
use crate::constants::{OPTION_PREFIX, VALUE_SEPARATOR};
use crate::options::ParseOptions;
use crate::source::ArgumentSource;

use self::tokenizer::tokenize;
use self::value::coerce_value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Positional,
    Named,
}

/// Resolve the command line to parse, falling back to `source`.
pub fn parse_command_line_with(
    raw: Option<&str>,
    source: &dyn ArgumentSource,
    options: &ParseOptions,
) -> ParsedArguments {
    match raw {
        Some(line) => parse_line(line, options),
        None => parse_line(&source.command_line(), options),
    }
}

pub fn parse_line(line: &str, options: &ParseOptions) -> ParsedArguments {
    let mut result = ParsedArguments::new();
    if line.trim().is_empty() {
        return result;
    }

    let working = match split_data(line, options) {
        Some((head, data)) => {
            debug!(len = data.len(), "captured trailing data");
            result.set_data(data);
            head.trim()
        }
        None => line,
    };

    let tokens = tokenize(working);
    let mut positional = Vec::new();
    let mut phase = Phase::Positional;
    let mut index = 0;

    while index < tokens.len() {
        let token = tokens[index].as_str();
        if !token.starts_with(OPTION_PREFIX) {
            match phase {
                Phase::Positional => positional.push(token.to_string()),
                Phase::Named => debug!(token, "dropped bare token after options"),
            }
            index += 1;
            continue;
        }

        phase = Phase::Named;
        let name = token.trim_start_matches(OPTION_PREFIX);

        if let Some((name, raw)) = name.split_once(VALUE_SEPARATOR) {
            result.accumulate(name, coerce_value(raw, options));
            index += 1;
            continue;
        }

        let mut values: SmallVec<[Value; 4]> = SmallVec::new();
        let mut next = index + 1;
        while let Some(candidate) = tokens.get(next) {
            if candidate.starts_with(OPTION_PREFIX) {
                break;
            }
            values.push(coerce_value(candidate, options));
            next += 1;
        }

        let value = match values.len() {
            0 => Value::Bool(true),
            1 => values.swap_remove(0),
            _ => Value::Array(values.into_vec()),
        };
        result.accumulate(name, value);
        index = next;
    }

    result.set_positional(positional);
    result
}

/// Split at the first trailing-data delimiter, before any quote handling.
fn split_data<'a>(line: &'a str, options: &ParseOptions) -> Option<(&'a str, &'a str)> {
    let delimiter = options.data_delimiter()?;
    let at = memmem::find(line.as_bytes(), delimiter.as_bytes())?;
    Some((&line[..at], &line[at + delimiter.len()..]))
}

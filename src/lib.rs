//! Parse command lines into a map of positional arguments, options with
//! JSON-like values, and a raw trailing-data segment.
//!
//! ```
//! use serde_json::json;
//!
//! let args = argline::parse("list Diagnostics -verbose -count:5 --- raw");
//! assert_eq!(
//!     args.into_value(),
//!     json!({"_": ["list", "Diagnostics"], "verbose": true, "count": 5, "__": " raw"})
//! );
//! ```

pub mod args;
pub mod constants;
pub mod error;
pub mod num;
pub mod options;
pub mod parse;
pub mod source;

use serde::de::DeserializeOwned;

pub use crate::args::ParsedArguments;
pub use crate::constants::{DATA_KEY, DEFAULT_DATA_DELIMITER, POSITIONAL_KEY};
pub use crate::error::Error;
pub use crate::options::ParseOptions;
pub use crate::parse::relaxed::{normalize_quotes, normalize_relaxed, quote_identifiers};
pub use crate::parse::tokenizer::tokenize;
pub use crate::parse::value::coerce_value;
pub use crate::source::{join_args, ArgumentSource, ProcessArgs, StaticArgs};
pub use serde_json::Value;

pub type Result<T> = std::result::Result<T, Error>;

pub fn parse(line: &str) -> ParsedArguments {
    parse_with_options(line, &ParseOptions::default())
}

pub fn parse_with_options(line: &str, options: &ParseOptions) -> ParsedArguments {
    parse::parse_line(line, options)
}

/// Parse `raw`, or this process's own arguments when `raw` is `None`.
pub fn parse_command_line(raw: Option<&str>) -> ParsedArguments {
    parse_command_line_with(raw, &ProcessArgs, &ParseOptions::default())
}

pub fn parse_command_line_with(
    raw: Option<&str>,
    source: &dyn ArgumentSource,
    options: &ParseOptions,
) -> ParsedArguments {
    parse::parse_command_line_with(raw, source, options)
}

/// Parse a command line and deserialize the resulting map.
pub fn from_str<T: DeserializeOwned>(line: &str) -> Result<T> {
    parse(line).deserialize()
}

pub fn from_str_with_options<T: DeserializeOwned>(line: &str, options: &ParseOptions) -> Result<T> {
    parse_with_options(line, options).deserialize()
}

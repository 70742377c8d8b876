/// Key holding the positional arguments captured before the first option.
pub const POSITIONAL_KEY: &str = "_";

/// Key holding the raw text that follows the trailing-data delimiter.
pub const DATA_KEY: &str = "__";

pub const DEFAULT_DATA_DELIMITER: &str = "---";

pub(crate) const OPTION_PREFIX: char = '-';
pub(crate) const VALUE_SEPARATOR: char = ':';

#[inline]
pub(crate) fn is_reserved_key(name: &str) -> bool {
    name == POSITIONAL_KEY || name == DATA_KEY
}

#[inline]
pub(crate) fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ch == '$'
}

#[inline]
pub(crate) fn is_identifier_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '$'
}

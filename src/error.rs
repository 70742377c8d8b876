use thiserror::Error;

/// Errors raised when reading parsed arguments into typed values.
///
/// Parsing itself never fails; these only come from the typed accessors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("argument `{name}`: {source}")]
    Argument {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid arguments: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl Error {
    pub fn argument(name: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Argument {
            name: name.into(),
            source,
        }
    }

    /// Name of the offending option, if the error concerns a single one.
    pub fn argument_name(&self) -> Option<&str> {
        match self {
            Self::Argument { name, .. } => Some(name),
            Self::Deserialize(_) => None,
        }
    }
}

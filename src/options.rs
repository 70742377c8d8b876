use crate::constants::DEFAULT_DATA_DELIMITER;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Marker that starts the raw trailing-data segment. Empty disables it.
    pub data_delimiter: String,
    /// Retry non-strict object/array literals through the relaxed normalizer.
    pub relaxed: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.data_delimiter = delimiter.into();
        self
    }

    pub fn without_data_delimiter(mut self) -> Self {
        self.data_delimiter.clear();
        self
    }

    pub fn with_relaxed(mut self, relaxed: bool) -> Self {
        self.relaxed = relaxed;
        self
    }

    pub(crate) fn data_delimiter(&self) -> Option<&str> {
        if self.data_delimiter.is_empty() {
            None
        } else {
            Some(&self.data_delimiter)
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            data_delimiter: DEFAULT_DATA_DELIMITER.to_string(),
            relaxed: true,
        }
    }
}

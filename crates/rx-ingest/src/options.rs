//! Reader configuration.

use serde::{Deserialize, Serialize};

/// Options controlling how a medication source is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadOptions {
    /// Field delimiter byte.
    pub delimiter: u8,

    /// Cell texts read as a missing value.
    ///
    /// Empty by default: an empty cell is an empty string, and only fields a
    /// row does not have at all are missing.
    pub null_values: Vec<String>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            null_values: Vec::new(),
        }
    }
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_null_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.null_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if `value` is one of the configured null markers.
    pub fn is_null(&self, value: &str) -> bool {
        self.null_values.iter().any(|marker| marker == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_null_markers() {
        let options = ReadOptions::default();
        assert_eq!(options.delimiter, b',');
        assert!(!options.is_null(""));
    }

    #[test]
    fn null_markers_match_exactly() {
        let options = ReadOptions::new().with_null_values(["", "NA"]);
        assert!(options.is_null(""));
        assert!(options.is_null("NA"));
        assert!(!options.is_null("na"));
        assert!(!options.is_null(" NA"));
    }
}

//! CSV header parsing and schema checks.

/// Column names from the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeaders {
    /// Normalized column names (trimmed).
    pub columns: Vec<String>,
}

impl CsvHeaders {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Builds headers from raw header fields.
    pub fn from_fields<'a>(fields: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(fields.into_iter().map(normalize_header).collect())
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of the first column named `column`.
    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.position(column).is_some()
    }

    /// Required columns absent from the header, in the order given.
    pub fn missing(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|column| !self.contains(column))
            .map(|column| (*column).to_string())
            .collect()
    }
}

/// Normalizes a header value by trimming whitespace.
pub fn normalize_header(value: &str) -> String {
    value.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields_trims() {
        let headers = CsvHeaders::from_fields([" brand_name ", "route"]);
        assert_eq!(headers.columns, vec!["brand_name", "route"]);
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_missing_keeps_required_order() {
        let headers = CsvHeaders::from_fields(["route", "extra"]);
        assert_eq!(
            headers.missing(&["brand_name", "route", "dosage_form"]),
            vec!["brand_name", "dosage_form"]
        );
    }

    #[test]
    fn test_position_uses_first_duplicate() {
        let headers = CsvHeaders::from_fields(["a", "b", "a"]);
        assert_eq!(headers.position("a"), Some(0));
        assert_eq!(headers.position("c"), None);
    }
}

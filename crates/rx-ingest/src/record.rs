use std::collections::BTreeMap;

/// One data row of the source, keyed by column name.
///
/// A column without a value in this row (null) has no key in the map, so an
/// empty string and a missing value stay distinguishable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from `(column, value)` pairs; `None` values are null.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Self::new();
        for (column, value) in pairs {
            if let Some(value) = value {
                record.insert(column, value);
            }
        }
        record
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// The value for `column`, or `None` when it is null.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

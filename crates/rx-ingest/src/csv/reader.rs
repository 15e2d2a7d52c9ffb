//! Delimited text reading into raw row records.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};
use crate::options::ReadOptions;
use crate::record::RawRecord;

use super::header::CsvHeaders;

/// Header row plus every data row of a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub headers: CsvHeaders,
    pub records: Vec<RawRecord>,
}

/// Parses decoded source text into raw records.
///
/// Every column in `required` must be present in the header row, otherwise
/// the whole source is rejected with [`IngestError::SchemaError`]. Rows may
/// be shorter or longer than the header: missing trailing fields are null and
/// extra fields are ignored. When a column name repeats, its first
/// occurrence wins.
pub fn parse_csv_text(
    text: &str,
    path: &Path,
    options: &ReadOptions,
    required: &[&str],
) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(text.as_bytes());

    let headers = CsvHeaders::from_fields(
        reader
            .headers()
            .map_err(|e| IngestError::CsvParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
            .iter(),
    );

    let missing = headers.missing(required);
    if !missing.is_empty() {
        return Err(IngestError::SchemaError {
            path: path.to_path_buf(),
            missing,
        });
    }

    let primary: Vec<bool> = headers
        .columns
        .iter()
        .enumerate()
        .map(|(idx, column)| headers.position(column) == Some(idx))
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut record = RawRecord::new();
        for (idx, column) in headers.columns.iter().enumerate() {
            if !primary[idx] {
                continue;
            }
            match row.get(idx) {
                Some(value) if !options.is_null(value) => record.insert(column.as_str(), value),
                _ => {}
            }
        }
        records.push(record);
    }

    Ok(RawTable { headers, records })
}

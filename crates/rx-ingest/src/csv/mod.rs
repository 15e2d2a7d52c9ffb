//! CSV reading utilities.

mod header;
mod reader;

pub use header::CsvHeaders;
pub use reader::{RawTable, parse_csv_text};

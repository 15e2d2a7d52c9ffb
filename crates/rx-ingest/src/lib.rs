//! Medication source ingestion.
//!
//! This crate turns a delimited text file into raw row records, one
//! [`RawRecord`] per data row, keyed by header name.
//!
//! # Features
//!
//! - **Source Reading**: Read the whole file in one scoped operation
//! - **Encoding Fallback**: UTF-8 first, ISO-8859-1 when UTF-8 decoding fails
//! - **CSV Parsing**: Header row plus data rows, short rows yield null fields
//! - **Schema Check**: Report every required column missing from the header
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use rx_ingest::{ReadOptions, decode_source, parse_csv_text, read_source_bytes};
//!
//! let path = Path::new("drugs.csv");
//! let bytes = read_source_bytes(path)?;
//! let decoded = decode_source(&bytes);
//! let table = parse_csv_text(
//!     &decoded.text,
//!     path,
//!     &ReadOptions::default(),
//!     &["brand_name", "route"],
//! )?;
//! println!("{} rows", table.records.len());
//! ```

mod csv;
mod decode;
mod error;
mod options;
mod record;

// === Error Types ===
pub use error::{IngestError, Result};

// === Source Reading ===
pub use decode::{DecodedSource, SourceEncoding, decode_source, read_source_bytes};

// === CSV Reading ===
pub use crate::csv::{CsvHeaders, RawTable, parse_csv_text};

// === Options & Records ===
pub use options::ReadOptions;
pub use record::RawRecord;

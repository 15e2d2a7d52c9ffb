//! The normalization pipeline.

use std::collections::HashSet;
use std::path::Path;

use rx_ingest::{
    DecodedSource, ReadOptions, RawRecord, SourceEncoding, decode_source, parse_csv_text,
    read_source_bytes,
};
use rx_model::{MedicationEntry, MedicationTable};
use tracing::{debug, info, info_span, warn};

use crate::columns::{ACTIVE_INGREDIENTS, BRAND_NAME, DOSAGE_FORM, REQUIRED_COLUMNS, ROUTE};
use crate::dose::extract_dose;
use crate::error::Result;
use crate::hash::sha256_hex;

/// Row counts for one normalization run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeSummary {
    /// Data rows read from the source.
    pub raw_rows: usize,
    /// Rows dropped because the drug name was missing.
    pub missing_name: usize,
    /// Rows dropped as exact duplicates of an earlier row.
    pub duplicates: usize,
    /// Entries in the resulting table.
    pub entries: usize,
}

/// A normalized table together with facts about the source it came from.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub table: MedicationTable,
    pub summary: NormalizeSummary,
    pub encoding: SourceEncoding,
    /// SHA-256 of the raw source bytes.
    pub sha256: String,
}

/// Projects one raw row onto an entry, or `None` when the drug name is null.
fn project(record: &RawRecord) -> Option<MedicationEntry> {
    let dose = extract_dose(record.get(ACTIVE_INGREDIENTS));
    let drug_name = record.get(BRAND_NAME)?;
    Some(MedicationEntry::new(
        drug_name,
        dose,
        record.get(DOSAGE_FORM).map(str::to_string),
        record.get(ROUTE).map(str::to_string),
    ))
}

/// Normalizes raw rows into a de-duplicated medication table.
///
/// Rows with a null `brand_name` are dropped; an empty name is kept. Rows
/// equal on all four kept fields collapse into the first occurrence, so
/// differences in ignored columns do not keep duplicates apart.
pub fn normalize_records<'a, I>(records: I) -> (MedicationTable, NormalizeSummary)
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    let mut summary = NormalizeSummary::default();
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for record in records {
        summary.raw_rows += 1;
        let Some(entry) = project(record) else {
            summary.missing_name += 1;
            continue;
        };
        if seen.insert(entry.clone()) {
            entries.push(entry);
        } else {
            summary.duplicates += 1;
        }
    }

    summary.entries = entries.len();
    (MedicationTable::new(entries), summary)
}

/// Normalizes an in-memory source. `path` is only used in error messages.
pub fn normalize_bytes(bytes: &[u8], path: &Path, options: &ReadOptions) -> Result<Normalized> {
    let DecodedSource { text, encoding } = decode_source(bytes);
    if encoding == SourceEncoding::Latin1 {
        warn!(
            path = %path.display(),
            "source is not valid UTF-8, decoded as ISO-8859-1"
        );
    }

    let raw = parse_csv_text(&text, path, options, REQUIRED_COLUMNS)?;
    debug!(
        columns = raw.headers.len(),
        rows = raw.records.len(),
        "parsed medication source"
    );

    let (table, summary) = normalize_records(&raw.records);
    info!(
        raw_rows = summary.raw_rows,
        missing_name = summary.missing_name,
        duplicates = summary.duplicates,
        entries = summary.entries,
        "normalized medication table"
    );

    Ok(Normalized {
        table,
        summary,
        encoding,
        sha256: sha256_hex(bytes),
    })
}

/// Reads and normalizes the source file at `path`.
pub fn normalize_path(path: &Path, options: &ReadOptions) -> Result<Normalized> {
    let span = info_span!("normalize", path = %path.display());
    let _guard = span.enter();
    let bytes = read_source_bytes(path)?;
    normalize_bytes(&bytes, path, options)
}

//! Integration tests for reading medication sources from disk.

use std::io::Write;
use std::path::Path;

use rx_ingest::{
    IngestError, RawTable, ReadOptions, SourceEncoding, decode_source, parse_csv_text,
    read_source_bytes,
};
use tempfile::NamedTempFile;

const REQUIRED: &[&str] = &["brand_name", "active_ingredients", "dosage_form", "route"];

fn write_source(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content).expect("write temp file");
    file
}

fn read_table(path: &Path) -> rx_ingest::Result<RawTable> {
    let bytes = read_source_bytes(path)?;
    parse_csv_text(
        &decode_source(&bytes).text,
        path,
        &ReadOptions::default(),
        REQUIRED,
    )
}

#[test]
fn reads_fda_style_source() {
    let file = write_source(
        b"brand_name,generic_name,active_ingredients,dosage_form,route\n\
          Morphine Sulfate,MORPHINE,Morphine Sulfate (30MG),Tablet,ORAL\n\
          Advil,IBUPROFEN,Ibuprofen (200 mg),\"Tablet, Coated\",ORAL\n",
    );
    let table = read_table(file.path()).expect("read");
    assert_eq!(table.records.len(), 2);
    assert_eq!(table.records[1].get("dosage_form"), Some("Tablet, Coated"));
    assert_eq!(table.records[1].get("generic_name"), Some("IBUPROFEN"));
}

#[test]
fn latin1_source_with_invalid_utf8_still_reads() {
    let file = write_source(
        b"brand_name,active_ingredients,dosage_form,route\n\
          Sp\xE9cial,Thing (5 \xB5G),Cr\xE8me,TOPICAL\n",
    );
    let bytes = read_source_bytes(file.path()).expect("read bytes");
    assert_eq!(decode_source(&bytes).encoding, SourceEncoding::Latin1);

    let table = read_table(file.path()).expect("read");
    assert_eq!(table.records[0].get("brand_name"), Some("Spécial"));
    assert_eq!(table.records[0].get("active_ingredients"), Some("Thing (5 µG)"));
    assert_eq!(table.records[0].get("dosage_form"), Some("Crème"));
}

#[test]
fn missing_route_column_is_schema_error() {
    let file = write_source(b"brand_name,active_ingredients,dosage_form\nA,B (1MG),Tablet\n");
    let err = read_table(file.path()).unwrap_err();
    assert!(matches!(err, IngestError::SchemaError { ref missing, .. } if missing == &["route"]));
    assert!(err.to_string().contains("route"));
}

#[test]
fn missing_file_is_source_unavailable() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = read_table(&dir.path().join("drugs.csv")).unwrap_err();
    assert!(matches!(err, IngestError::SourceUnavailable { .. }));
}

//! `list` and `render` output written to in-memory sinks.

use std::io::Write;
use std::num::NonZeroUsize;

use rx_cli::commands::{ListRequest, Selector, run_list, run_render};
use rx_cli::config::AppConfig;
use rx_ingest::ReadOptions;
use tempfile::NamedTempFile;

const HEADER: &str = "brand_name,active_ingredients,dosage_form,route\n";

fn write_source(rows: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    write!(file, "{HEADER}{rows}").expect("write temp file");
    file
}

fn config_for(file: &NamedTempFile) -> AppConfig {
    AppConfig {
        source: file.path().to_path_buf(),
        read_options: ReadOptions::default(),
    }
}

fn two_medications() -> NamedTempFile {
    write_source(
        "Oxycodone,Oxycodone HCl (5 MG),Tablet,ORAL\n\
         Morphine Sulfate,Morphine Sulfate (30MG),Tablet,ORAL\n",
    )
}

fn list(config: &AppConfig, request: &ListRequest<'_>) -> String {
    let mut out = Vec::new();
    run_list(config, request, &mut out).expect("list");
    String::from_utf8(out).expect("utf-8 output")
}

fn render(config: &AppConfig, selector: Selector<'_>) -> anyhow::Result<String> {
    let mut out = Vec::new();
    run_render(config, selector, &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn list_empty_table_prints_notice() {
    let file = write_source("");
    let output = list(&config_for(&file), &ListRequest::default());
    assert_eq!(output, "No medications available.\n");
}

#[test]
fn list_filter_without_match_prints_notice() {
    let file = two_medications();
    let request = ListRequest {
        filter: Some("aspirin"),
        ..ListRequest::default()
    };
    let output = list(&config_for(&file), &request);
    assert_eq!(output, "No medications match 'aspirin'.\n");
}

#[test]
fn list_table_contains_sorted_labels() {
    let file = two_medications();
    let output = list(&config_for(&file), &ListRequest::default());
    let morphine = output
        .find("Morphine Sulfate 30MG (Tablet, ORAL)")
        .expect("morphine row");
    let oxycodone = output
        .find("Oxycodone 5MG (Tablet, ORAL)")
        .expect("oxycodone row");
    assert!(morphine < oxycodone);
}

#[test]
fn list_json_keeps_full_list_positions() {
    let file = two_medications();
    let request = ListRequest {
        filter: Some("oxy"),
        json: true,
        styled: false,
    };
    let output = list(&config_for(&file), &request);
    let json: serde_json::Value = serde_json::from_str(&output).expect("json output");
    assert_eq!(
        json,
        serde_json::json!([{
            "position": 2,
            "label": "Oxycodone 5MG (Tablet, ORAL)",
            "drug_name": "Oxycodone",
            "dose": "5MG",
            "form": "Tablet",
            "route": "ORAL",
        }])
    );
}

#[test]
fn render_by_label() {
    let file = two_medications();
    let output = render(
        &config_for(&file),
        Selector::Label("Oxycodone 5MG (Tablet, ORAL)"),
    )
    .expect("render");
    assert_eq!(
        output,
        "RX: Oxycodone 5MG\nTAKE: 1 Tablet via ORAL every 6 hours as needed for pain.\n"
    );
}

#[test]
fn render_by_position() {
    let file = two_medications();
    let position = NonZeroUsize::new(2).expect("non-zero");
    let output = render(&config_for(&file), Selector::Position(position)).expect("render");
    assert!(output.starts_with("RX: Oxycodone 5MG\n"));
}

#[test]
fn render_default_is_first_label() {
    let file = two_medications();
    let output = render(&config_for(&file), Selector::Default).expect("render");
    assert_eq!(
        output,
        "RX: Morphine Sulfate 30MG\nTAKE: 1 Tablet via ORAL every 6 hours as needed for pain.\n"
    );
}

#[test]
fn render_selection_errors() {
    let file = two_medications();
    let position = NonZeroUsize::new(5).expect("non-zero");
    let err = render(&config_for(&file), Selector::Position(position)).unwrap_err();
    assert_eq!(
        format!("{err:#}"),
        "select medication: no medication at position 5 (table has 2 entries)"
    );

    let empty = write_source("");
    let err = render(&config_for(&empty), Selector::Default).unwrap_err();
    assert_eq!(
        format!("{err:#}"),
        "select medication: no medications available to select"
    );
}

#[test]
fn render_missing_source_fails_to_load() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = AppConfig {
        source: dir.path().join("drugs.csv"),
        read_options: ReadOptions::default(),
    };
    let err = render(&config, Selector::Default).unwrap_err();
    assert!(format!("{err:#}").starts_with("load medications from"));
}

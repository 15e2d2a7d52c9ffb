//! Table and JSON views of the medication list.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use rx_model::MedicationEntry;
use serde::Serialize;

/// An entry as exposed to machine consumers, label included.
#[derive(Debug, Serialize)]
pub struct EntryView<'a> {
    pub position: usize,
    pub label: &'a str,
    #[serde(flatten)]
    pub entry: &'a MedicationEntry,
}

/// Pairs label-ordered rows with their 1-based positions.
pub fn entry_views<'a>(rows: &'a [(String, &'a MedicationEntry)]) -> Vec<EntryView<'a>> {
    rows.iter()
        .enumerate()
        .map(|(idx, (label, entry))| EntryView {
            position: idx + 1,
            label,
            entry,
        })
        .collect()
}

/// Keeps views whose label contains `needle`, ignoring ASCII case.
///
/// Positions are left untouched so they still address the full list.
pub fn filter_views<'a>(views: Vec<EntryView<'a>>, needle: &str) -> Vec<EntryView<'a>> {
    let needle = needle.to_ascii_lowercase();
    views
        .into_iter()
        .filter(|view| view.label.to_ascii_lowercase().contains(&needle))
        .collect()
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(text) => Cell::new(text),
        None => Cell::new("-").add_attribute(Attribute::Dim),
    }
}

/// Builds the medication list table.
///
/// `styled = false` disables colours and terminal width detection.
pub fn medication_table(views: &[EntryView<'_>], styled: bool) -> Table {
    let mut table = Table::new();
    if !styled {
        table.force_no_tty();
    }
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("#"),
        header_cell("Label"),
        header_cell("Drug"),
        header_cell("Dose"),
        header_cell("Form"),
        header_cell("Route"),
    ]);
    for view in views {
        table.add_row(vec![
            Cell::new(view.position).set_alignment(CellAlignment::Right),
            Cell::new(view.label),
            Cell::new(&view.entry.drug_name),
            Cell::new(&view.entry.dose),
            optional_cell(view.entry.form.as_deref()),
            optional_cell(view.entry.route.as_deref()),
        ]);
    }
    table
}

/// Serializes entries as a pretty JSON array.
pub fn entries_json(views: &[EntryView<'_>]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(views)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<MedicationEntry> {
        vec![
            MedicationEntry::new(
                "Morphine Sulfate",
                "30MG",
                Some("Tablet".to_string()),
                Some("ORAL".to_string()),
            ),
            MedicationEntry::new("Advil", "200MG", None, None),
        ]
    }

    #[test]
    fn table_lists_every_entry() {
        let entries = sample();
        let rows: Vec<(String, &MedicationEntry)> =
            entries.iter().map(|e| (e.label(), e)).collect();
        let views = entry_views(&rows);
        let rendered = medication_table(&views, false).to_string();
        assert!(rendered.contains("Morphine Sulfate 30MG (Tablet, ORAL)"));
        assert!(rendered.contains("Advil 200MG (, )"));
        assert!(rendered.contains("Route"));
    }

    #[test]
    fn filter_keeps_full_list_positions() {
        let entries = sample();
        let rows: Vec<(String, &MedicationEntry)> =
            entries.iter().map(|e| (e.label(), e)).collect();
        let views = filter_views(entry_views(&rows), "ADVIL");
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].position, 2);
    }

    #[test]
    fn json_includes_label_and_position() {
        let entries = sample();
        let rows = vec![(entries[1].label(), &entries[1])];
        let views = entry_views(&rows);
        let json: serde_json::Value =
            serde_json::from_str(&entries_json(&views).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "position": 1,
                "label": "Advil 200MG (, )",
                "drug_name": "Advil",
                "dose": "200MG",
                "form": null,
                "route": null,
            }])
        );
    }
}

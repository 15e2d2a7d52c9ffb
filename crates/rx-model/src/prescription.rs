//! Fixed prescription text template.

use std::fmt;

use crate::entry::MedicationEntry;

/// Prescription text for one selected medication.
///
/// ```
/// use rx_model::{MedicationEntry, Prescription};
///
/// let entry = MedicationEntry::new(
///     "Morphine Sulfate",
///     "30MG",
///     Some("Tablet".to_string()),
///     Some("ORAL".to_string()),
/// );
/// assert_eq!(
///     Prescription::new(&entry).to_string(),
///     "RX: Morphine Sulfate 30MG\nTAKE: 1 Tablet via ORAL every 6 hours as needed for pain."
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Prescription<'a> {
    entry: &'a MedicationEntry,
}

impl<'a> Prescription<'a> {
    pub fn new(entry: &'a MedicationEntry) -> Self {
        Self { entry }
    }
}

impl fmt::Display for Prescription<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!(
            "RX: {} {}\nTAKE: 1 {} via {} every 6 hours as needed for pain.",
            self.entry.drug_name,
            self.entry.dose,
            self.entry.form_text(),
            self.entry.route_text()
        );
        f.write_str(text.trim())
    }
}

/// Renders the prescription text for `entry`.
pub fn render_prescription(entry: &MedicationEntry) -> String {
    Prescription::new(entry).to_string()
}

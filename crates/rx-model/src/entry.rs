use serde::{Deserialize, Serialize};

/// One normalized row of the medication lookup table.
///
/// `form` and `route` keep the distinction between a missing source value
/// (`None`) and an empty one (`Some("")`); both print as empty text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MedicationEntry {
    /// Brand name of the product.
    pub drug_name: String,
    /// Strength extracted from the active ingredients, without whitespace.
    pub dose: String,
    /// Dosage form (e.g. "Tablet").
    pub form: Option<String>,
    /// Route of administration (e.g. "ORAL").
    pub route: Option<String>,
}

impl MedicationEntry {
    pub fn new(
        drug_name: impl Into<String>,
        dose: impl Into<String>,
        form: Option<String>,
        route: Option<String>,
    ) -> Self {
        Self {
            drug_name: drug_name.into(),
            dose: dose.into(),
            form,
            route,
        }
    }

    /// Dosage form, empty when missing.
    pub fn form_text(&self) -> &str {
        self.form.as_deref().unwrap_or_default()
    }

    /// Route, empty when missing.
    pub fn route_text(&self) -> &str {
        self.route.as_deref().unwrap_or_default()
    }

    /// Human-readable label used in selection lists.
    ///
    /// Format: `"{drug_name} {dose} ({form}, {route})"`.
    pub fn label(&self) -> String {
        format!(
            "{} {} ({}, {})",
            self.drug_name,
            self.dose,
            self.form_text(),
            self.route_text()
        )
    }
}

//! The normalized medication lookup table.

use crate::entry::MedicationEntry;
use crate::error::{Result, SelectionError};

/// Immutable, de-duplicated collection of medication entries.
///
/// Entry order carries no meaning. Display and positional selection always go
/// through [`MedicationTable::sorted`], which orders entries by label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedicationTable {
    entries: Vec<MedicationEntry>,
}

impl MedicationTable {
    pub fn new(entries: Vec<MedicationEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[MedicationEntry] {
        &self.entries
    }

    /// Entries paired with their labels, ordered by label.
    ///
    /// The sort is stable, so entries sharing a label keep table order.
    pub fn sorted(&self) -> Vec<(String, &MedicationEntry)> {
        let mut labeled: Vec<(String, &MedicationEntry)> = self
            .entries
            .iter()
            .map(|entry| (entry.label(), entry))
            .collect();
        labeled.sort_by(|a, b| a.0.cmp(&b.0));
        labeled
    }

    /// All labels in display order.
    pub fn sorted_labels(&self) -> Vec<String> {
        self.sorted().into_iter().map(|(label, _)| label).collect()
    }

    /// First entry (in table order) whose label equals `label`.
    pub fn find_by_label(&self, label: &str) -> Result<&MedicationEntry> {
        if self.entries.is_empty() {
            return Err(SelectionError::EmptySelection);
        }
        self.entries
            .iter()
            .find(|entry| entry.label() == label)
            .ok_or_else(|| SelectionError::UnknownLabel {
                label: label.to_string(),
            })
    }

    /// Entry at 1-based `position` in label order.
    ///
    /// The entry is resolved through its label, so duplicate labels resolve
    /// to the same entry as [`MedicationTable::find_by_label`].
    pub fn select_position(&self, position: usize) -> Result<&MedicationEntry> {
        let sorted = self.sorted();
        if sorted.is_empty() {
            return Err(SelectionError::EmptySelection);
        }
        let (label, _) = position
            .checked_sub(1)
            .and_then(|idx| sorted.get(idx))
            .ok_or(SelectionError::OutOfRange {
                position,
                len: sorted.len(),
            })?;
        self.find_by_label(label)
    }

    /// The entry preselected for display: the first label in sort order.
    pub fn default_selection(&self) -> Result<&MedicationEntry> {
        self.select_position(1)
    }
}

impl FromIterator<MedicationEntry> for MedicationTable {
    fn from_iter<I: IntoIterator<Item = MedicationEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

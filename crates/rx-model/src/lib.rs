//! Data model for the prescription generator.
//!
//! A [`MedicationTable`] holds the normalized, de-duplicated medication
//! entries. Consumers pick one entry by label (or by position in label order)
//! and render it with [`Prescription`].

pub mod entry;
pub mod error;
pub mod prescription;
pub mod table;

pub use entry::MedicationEntry;
pub use error::{Result, SelectionError};
pub use prescription::{Prescription, render_prescription};
pub use table::MedicationTable;

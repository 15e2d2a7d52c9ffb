//! Medication table normalization.
//!
//! Turns raw source rows into a clean [`rx_model::MedicationTable`]:
//!
//! 1. Decode the source (UTF-8, then ISO-8859-1)
//! 2. Rename `brand_name` to `drug_name` and `dosage_form` to `form`
//! 3. Extract the dose from the first parenthesized group of
//!    `active_ingredients`, with whitespace removed
//! 4. Keep `drug_name`, `dose`, `form`, `route`
//! 5. Drop rows without a drug name
//! 6. Drop duplicate rows
//!
//! Loading is memoized by the caller through [`TableCache`].

pub mod cache;
pub mod columns;
pub mod dose;
pub mod error;
pub mod hash;
pub mod pipeline;

pub use cache::{CacheStatus, TableCache};
pub use dose::extract_dose;
pub use error::{NormalizeError, Result};
pub use pipeline::{
    NormalizeSummary, Normalized, normalize_bytes, normalize_path, normalize_records,
};

use thiserror::Error;

/// Errors raised while choosing an entry from a [`crate::MedicationTable`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// The table has no entries, so there is nothing to choose and no default.
    #[error("no medications available to select")]
    EmptySelection,

    #[error("no medication with label '{label}'")]
    UnknownLabel { label: String },

    #[error("no medication at position {position} (table has {len} entries)")]
    OutOfRange { position: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, SelectionError>;

use rx_ingest::IngestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
}

impl NormalizeError {
    /// True when the source file could not be read at all.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, Self::Ingest(IngestError::SourceUnavailable { .. }))
    }

    /// True when the source lacks a required column.
    pub fn is_schema_error(&self) -> bool {
        matches!(self, Self::Ingest(IngestError::SchemaError { .. }))
    }
}

pub type Result<T> = std::result::Result<T, NormalizeError>;

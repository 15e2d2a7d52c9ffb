//! Caller-owned memoization of the normalized table.
//!
//! The table is built once and reused until the caller invalidates it or asks
//! for a reload. A reload re-reads the source and only rebuilds the table when
//! the SHA-256 of the source bytes changed.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rx_ingest::{ReadOptions, read_source_bytes};
use rx_model::MedicationTable;
use tracing::{debug, info_span};

use crate::error::Result;
use crate::hash::sha256_hex;
use crate::pipeline::{NormalizeSummary, normalize_bytes};

/// How a cache request was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// The table was built from the source.
    Built,
    /// The cached table was returned without rebuilding.
    Reused,
}

#[derive(Debug)]
struct CachedTable {
    path: PathBuf,
    sha256: String,
    summary: NormalizeSummary,
    table: Arc<MedicationTable>,
}

#[derive(Debug, Default)]
pub struct TableCache {
    options: ReadOptions,
    cached: Option<CachedTable>,
}

impl TableCache {
    pub fn new(options: ReadOptions) -> Self {
        Self {
            options,
            cached: None,
        }
    }

    /// Returns the cached table for `path`, building it on first use.
    ///
    /// A cached table for the same path is returned without touching the file.
    pub fn get_or_load(&mut self, path: &Path) -> Result<(Arc<MedicationTable>, CacheStatus)> {
        if let Some(cached) = self.cached.as_ref().filter(|c| c.path == path) {
            return Ok((Arc::clone(&cached.table), CacheStatus::Reused));
        }
        self.reload(path)
    }

    /// Re-reads `path` and rebuilds the table if the source content changed.
    ///
    /// On failure the cache is cleared, so no stale table outlives a failed
    /// reload.
    pub fn reload(&mut self, path: &Path) -> Result<(Arc<MedicationTable>, CacheStatus)> {
        let span = info_span!("reload", path = %path.display());
        let _guard = span.enter();

        let bytes = match read_source_bytes(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                self.invalidate();
                return Err(err.into());
            }
        };

        let sha256 = sha256_hex(&bytes);
        if let Some(cached) = self
            .cached
            .as_ref()
            .filter(|c| c.path == path && c.sha256 == sha256)
        {
            debug!(sha256 = %sha256, "source unchanged, reusing table");
            return Ok((Arc::clone(&cached.table), CacheStatus::Reused));
        }

        let normalized = match normalize_bytes(&bytes, path, &self.options) {
            Ok(normalized) => normalized,
            Err(err) => {
                self.invalidate();
                return Err(err);
            }
        };
        let table = Arc::new(normalized.table);
        self.cached = Some(CachedTable {
            path: path.to_path_buf(),
            sha256: normalized.sha256,
            summary: normalized.summary,
            table: Arc::clone(&table),
        });
        Ok((table, CacheStatus::Built))
    }

    /// Drops the cached table.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// The cached table, if any.
    pub fn cached(&self) -> Option<Arc<MedicationTable>> {
        self.cached.as_ref().map(|c| Arc::clone(&c.table))
    }

    /// Row counts from the build that produced the cached table.
    pub fn summary(&self) -> Option<NormalizeSummary> {
        self.cached.as_ref().map(|c| c.summary)
    }

    /// Digest of the source the cached table was built from.
    pub fn source_digest(&self) -> Option<&str> {
        self.cached.as_ref().map(|c| c.sha256.as_str())
    }
}

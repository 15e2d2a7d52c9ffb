//! Interactive medication selection.
//!
//! Reads one command per line. A number picks the entry at that position in
//! the menu, any other text is matched as an exact label, and an empty line
//! picks the first entry. `:list` reprints the menu, `:reload` rebuilds the
//! table through the cache, and `:quit` (or end of input) ends the session.
//!
//! Selection mistakes are reported and the session continues. Load failures
//! end the session with the error.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use rx_model::{MedicationEntry, MedicationTable, Prescription, SelectionError};
use rx_normalization::{CacheStatus, TableCache};
use tracing::{info, trace};

use crate::logging::redact_value;

const PROMPT: &str = "> ";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Default,
    Position(usize),
    Label(String),
    List,
    Reload,
    Quit,
}

impl SessionCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        match line.trim() {
            "" => Self::Default,
            ":q" | ":quit" => Self::Quit,
            ":l" | ":list" => Self::List,
            ":r" | ":reload" => Self::Reload,
            trimmed => match trimmed.parse::<usize>() {
                Ok(position) => Self::Position(position),
                Err(_) => Self::Label(line.to_string()),
            },
        }
    }
}

/// Interactive selection state over a cached table.
pub struct Session<'a> {
    cache: &'a mut TableCache,
    source: PathBuf,
    table: Arc<MedicationTable>,
}

impl<'a> Session<'a> {
    /// Loads the table for `source` through `cache`.
    pub fn open(cache: &'a mut TableCache, source: &Path) -> Result<Self> {
        let (table, _) = cache
            .get_or_load(source)
            .with_context(|| format!("load medications from {}", source.display()))?;
        Ok(Self {
            cache,
            source: source.to_path_buf(),
            table,
        })
    }

    pub fn table(&self) -> &MedicationTable {
        &self.table
    }

    /// Re-reads the source through the cache.
    pub fn reload(&mut self) -> Result<CacheStatus> {
        let (table, status) = self
            .cache
            .reload(&self.source)
            .with_context(|| format!("reload medications from {}", self.source.display()))?;
        self.table = table;
        info!(entries = self.table.len(), ?status, "reloaded medication table");
        Ok(status)
    }

    fn select(&self, command: &SessionCommand) -> Option<Result<&MedicationEntry, SelectionError>> {
        match command {
            SessionCommand::Default => Some(self.table.default_selection()),
            SessionCommand::Position(position) => Some(self.table.select_position(*position)),
            SessionCommand::Label(label) => Some(self.table.find_by_label(label)),
            _ => None,
        }
    }

    pub fn write_menu<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let labels = self.table.sorted_labels();
        if labels.is_empty() {
            writeln!(out, "No medications available.")?;
            return Ok(());
        }
        writeln!(out, "Select a medication:")?;
        let width = labels.len().to_string().len();
        for (idx, label) in labels.iter().enumerate() {
            writeln!(out, "  {:>width$}. {label}", idx + 1)?;
        }
        Ok(())
    }

    /// Runs the read-select-render loop until `:quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        self.write_menu(out)?;
        write!(out, "{PROMPT}")?;
        out.flush()?;

        for line in input.lines() {
            let line = line.context("read selection")?;
            let command = SessionCommand::parse(&line);
            match &command {
                SessionCommand::Quit => return Ok(()),
                SessionCommand::List => self.write_menu(out)?,
                SessionCommand::Reload => {
                    match self.reload()? {
                        CacheStatus::Built => writeln!(
                            out,
                            "Reloaded {} medications.",
                            self.table.len()
                        )?,
                        CacheStatus::Reused => writeln!(out, "Source unchanged.")?,
                    }
                    self.write_menu(out)?;
                }
                _ => match self.select(&command) {
                    Some(Ok(entry)) => {
                        trace!(drug = redact_value(&entry.drug_name), "selected medication");
                        writeln!(out, "{}", Prescription::new(entry))?;
                    }
                    Some(Err(err)) => writeln!(out, "error: {err}")?,
                    None => {}
                },
            }
            writeln!(out)?;
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        Ok(())
    }
}

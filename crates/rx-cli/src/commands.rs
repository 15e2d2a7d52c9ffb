//! Subcommand implementations.
//!
//! Each command loads the table through a fresh [`TableCache`] and writes its
//! output to the given sink.

use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::sync::Arc;

use anyhow::{Context, Result};
use rx_model::{MedicationEntry, MedicationTable, render_prescription};
use rx_normalization::TableCache;
use tracing::info_span;

use crate::config::AppConfig;
use crate::session::Session;
use crate::view::{entries_json, entry_views, filter_views, medication_table};

/// Options for `rxgen list`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListRequest<'a> {
    /// Case-insensitive label filter.
    pub filter: Option<&'a str>,
    pub json: bool,
    /// Colours and terminal width for the table.
    pub styled: bool,
}

/// How `rxgen render` picks its medication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    /// The first label in sort order.
    Default,
    Label(&'a str),
    /// 1-based position in label order.
    Position(NonZeroUsize),
}

impl Selector<'_> {
    pub fn select<'t>(&self, table: &'t MedicationTable) -> rx_model::Result<&'t MedicationEntry> {
        match self {
            Self::Default => table.default_selection(),
            Self::Label(label) => table.find_by_label(label),
            Self::Position(position) => table.select_position(position.get()),
        }
    }
}

fn load_table(cache: &mut TableCache, config: &AppConfig) -> Result<Arc<MedicationTable>> {
    let (table, _) = cache
        .get_or_load(&config.source)
        .with_context(|| format!("load medications from {}", config.source.display()))?;
    Ok(table)
}

pub fn run_list<W: Write>(config: &AppConfig, request: &ListRequest<'_>, out: &mut W) -> Result<()> {
    let span = info_span!("list", source = %config.source.display());
    let _guard = span.enter();
    let mut cache = TableCache::new(config.read_options.clone());
    let table = load_table(&mut cache, config)?;

    let rows = table.sorted();
    let mut views = entry_views(&rows);
    if let Some(needle) = request.filter {
        views = filter_views(views, needle);
    }

    if request.json {
        writeln!(out, "{}", entries_json(&views).context("serialize medications")?)?;
        return Ok(());
    }
    if views.is_empty() {
        match request.filter {
            Some(needle) => writeln!(out, "No medications match '{needle}'.")?,
            None => writeln!(out, "No medications available.")?,
        }
        return Ok(());
    }
    writeln!(out, "{}", medication_table(&views, request.styled))?;
    Ok(())
}

pub fn run_render<W: Write>(config: &AppConfig, selector: Selector<'_>, out: &mut W) -> Result<()> {
    let span = info_span!("render", source = %config.source.display());
    let _guard = span.enter();
    let mut cache = TableCache::new(config.read_options.clone());
    let table = load_table(&mut cache, config)?;

    let entry = selector.select(&table).context("select medication")?;
    writeln!(out, "{}", render_prescription(entry))?;
    Ok(())
}

/// Runs the interactive session on stdin and stdout.
pub fn run_select(config: &AppConfig) -> Result<()> {
    let span = info_span!("select", source = %config.source.display());
    let _guard = span.enter();
    let mut cache = TableCache::new(config.read_options.clone());
    let mut session = Session::open(&mut cache, &config.source)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout)
}

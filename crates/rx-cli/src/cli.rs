//! CLI argument definitions for the prescription generator.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use rx_cli::commands::Selector;

#[derive(Parser)]
#[command(
    name = "rxgen",
    version,
    about = "Prescription generator - pick a medication and render its prescription",
    long_about = "Load a medication reference table from a CSV file, pick one medication, \
                  and render a fixed-template prescription.\n\n\
                  The source must provide brand_name, active_ingredients, dosage_form, \
                  and route columns. UTF-8 is preferred; ISO-8859-1 is accepted."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Medication source CSV (default: $RXGEN_SOURCE, config file, or drugs.csv).
    #[arg(long = "source", value_name = "PATH", global = true)]
    pub source: Option<PathBuf>,

    /// TOML config file (default: $RXGEN_CONFIG).
    ///
    /// The `[source]` table accepts `path`, `delimiter`, and `null_values`.
    /// Empty cells are empty text by default; set
    /// `null_values = ["", "NA"]` to read empty and NA cells as missing, so
    /// rows without a brand name are dropped. See rxgen.example.toml.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow drug names in trace-level logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List available medications in label order.
    List(ListArgs),

    /// Render the prescription for one medication.
    Render(RenderArgs),

    /// Choose medications interactively and render their prescriptions.
    Select,
}

#[derive(Args)]
pub struct ListArgs {
    /// Only show labels containing this text (case-insensitive).
    #[arg(long = "filter", value_name = "TEXT")]
    pub filter: Option<String>,

    /// Print entries as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct RenderArgs {
    /// Exact label of the medication (as shown by `list`).
    #[arg(long = "label", value_name = "LABEL", conflicts_with = "position")]
    pub label: Option<String>,

    /// Position of the medication in `list` output (1-based).
    #[arg(long = "position", value_name = "N")]
    pub position: Option<NonZeroUsize>,
}

impl RenderArgs {
    pub fn selector(&self) -> Selector<'_> {
        match (&self.label, self.position) {
            (Some(label), _) => Selector::Label(label),
            (None, Some(position)) => Selector::Position(position),
            (None, None) => Selector::Default,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

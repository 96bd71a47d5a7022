//! Command-line parsing for the film log statistics tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the aggregation code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::Dimension;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "filmstats", version, about = "Statistics over a personal film ratings log")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Aggregate a ratings CSV, print the report, and optionally export it.
    Analyze(AnalyzeArgs),
    /// Print a previously exported report JSON.
    Show(ShowArgs),
}

/// Options for aggregating a ratings export.
#[derive(Debug, Parser, Clone)]
pub struct AnalyzeArgs {
    /// Ratings CSV (one row per rated title).
    #[arg(long, env = "FILMSTATS_CSV", default_value = "data/ratings-plus.csv")]
    pub csv: PathBuf,

    /// Length of each favorites / least favorites / most watched list.
    #[arg(long, default_value_t = 5)]
    pub top: usize,

    /// Genre minimum as a fraction of all films (floored, at least 1).
    #[arg(long, default_value_t = 0.1)]
    pub genre_min_fraction: f64,

    /// Minimum films per director.
    #[arg(long, default_value_t = 2)]
    pub director_min: usize,

    /// Minimum films per actor.
    #[arg(long, default_value_t = 3)]
    pub actor_min: usize,

    /// Personal ratings at or above this count as liked.
    #[arg(long, default_value_t = 7.0)]
    pub liked_threshold: f64,

    /// Export the report to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,

    /// Export one fully ranked dimension to CSV.
    #[arg(long = "export-csv", value_name = "CSV")]
    pub export_csv: Option<PathBuf>,

    /// Dimension written by `--export-csv`.
    #[arg(long, value_enum, default_value_t = Dimension::Genre)]
    pub dimension: Dimension,

    /// Only print the ingest summary and skip the report tables.
    #[arg(long)]
    pub quiet: bool,
}

/// Options for showing a saved report.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Report JSON produced by `filmstats analyze --export`.
    #[arg(long, value_name = "JSON", default_value = "stats.json")]
    pub report: PathBuf,
}

//! Shared analysis pipeline.
//!
//! CSV ingest -> normalization -> per-dimension aggregation -> report
//!
//! Front-ends only decide how to present the outputs.

use tracing::info;

use crate::domain::{CategoryStat, Dimension, MovieRecord, RunConfig, StatsConfig};
use crate::error::AppError;
use crate::io::ingest::IngestedData;
use crate::report::Report;
use crate::stats::{RankBy, aggregate_dimension, rank};

/// All computed outputs of a single `filmstats analyze` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub ingest: IngestedData,
    pub report: Report,
}

/// Execute the full pipeline for the configured CSV.
pub fn run_analysis(config: &RunConfig) -> Result<RunOutput, AppError> {
    let ingest = crate::io::ingest::load_records(&config.csv_path)?;
    run_analysis_with_ingest(ingest, &config.stats)
}

/// Execute the pipeline on already-ingested records.
pub fn run_analysis_with_ingest(ingest: IngestedData, stats: &StatsConfig) -> Result<RunOutput, AppError> {
    if !ingest.row_errors.is_empty() {
        info!(skipped = ingest.row_errors.len(), "rows skipped during ingest");
    }

    let report = Report::assemble(&ingest.records, stats)?;
    info!(films = report.total_films, "report assembled");

    Ok(RunOutput { ingest, report })
}

/// Every above-threshold category of one dimension, composite ranked.
pub fn ranked_dimension(records: &[MovieRecord], dimension: Dimension, stats: &StatsConfig) -> Vec<CategoryStat> {
    rank(&aggregate_dimension(records, dimension, stats), RankBy::Composite)
}

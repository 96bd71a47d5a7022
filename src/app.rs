//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and installs the log subscriber
//! - parses CLI arguments
//! - runs ingest + aggregation
//! - prints reports
//! - writes optional exports

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{AnalyzeArgs, Command, ShowArgs};
use crate::domain::{MinCount, RunConfig, StatsConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `filmstats` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    // `filmstats` and `filmstats --csv x.csv` behave like `filmstats analyze ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Analyze(args) => handle_analyze(args),
        Command::Show(args) => handle_show(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let config = run_config_from_args(&args)?;
    let run = pipeline::run_analysis(&config)?;

    println!("{}", crate::report::format_ingest_summary(&run.ingest));
    if !args.quiet {
        println!("{}", crate::report::format_report(&run.report));
    }

    if let Some(path) = &config.export_json {
        crate::io::export::write_report_json(path, &run.report)?;
        info!(path = %path.display(), "wrote report JSON");
    }
    if let Some(path) = &config.export_csv {
        let ranked = pipeline::ranked_dimension(&run.ingest.records, config.export_dimension, &config.stats);
        crate::io::export::write_category_csv(path, &ranked)?;
        info!(path = %path.display(), rows = ranked.len(), "wrote category CSV");
    }

    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let report = crate::io::export::read_report_json(&args.report)?;
    println!("{}", crate::report::format_report(&report));
    Ok(())
}

pub fn run_config_from_args(args: &AnalyzeArgs) -> Result<RunConfig, AppError> {
    if !(args.genre_min_fraction.is_finite() && args.genre_min_fraction >= 0.0) {
        return Err(AppError::new(2, "`--genre-min-fraction` must be a finite, non-negative number."));
    }
    if !args.liked_threshold.is_finite() {
        return Err(AppError::new(2, "`--liked-threshold` must be finite."));
    }

    Ok(RunConfig {
        csv_path: args.csv.clone(),
        stats: StatsConfig {
            genre_min: MinCount::Fraction(args.genre_min_fraction),
            director_min: MinCount::Fixed(args.director_min),
            actor_min: MinCount::Fixed(args.actor_min),
            liked_threshold: args.liked_threshold,
            top_n: args.top,
        },
        export_json: args.export.clone(),
        export_csv: args.export_csv.clone(),
        export_dimension: args.dimension,
    })
}

/// Rewrite argv so `filmstats` defaults to `filmstats analyze`.
///
/// Rules:
/// - `filmstats`                      -> `filmstats analyze`
/// - `filmstats --csv x.csv ...`      -> `filmstats analyze --csv x.csv ...`
/// - `filmstats --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("analyze".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "analyze" | "show");
    if is_subcommand {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "analyze".to_string());
        return argv;
    }

    argv
}

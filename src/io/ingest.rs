//! CSV ingest and normalization.
//!
//! This module is responsible for turning a ratings export into validated
//! `MovieRecord`s.
//!
//! Design goals:
//! - **Strict schema** for required columns (clear errors + exit code 2)
//! - **Row-level validation** (skip bad rows, but report what happened)
//! - **Deterministic behavior** (input order is preserved)
//! - **Separation of concerns**: no aggregation logic here

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::{debug, warn};

use crate::domain::{FILM_TITLE_TYPE, MovieRecord, RATING_MAX, RATING_MIN, RawRow};
use crate::error::AppError;

const COL_CONST: &str = "const";
const COL_TITLE: &str = "title";
const COL_ORIGINAL_TITLE: &str = "original title";
const COL_TITLE_TYPE: &str = "title type";
const COL_YOUR_RATING: &str = "your rating";
const COL_IMDB_RATING: &str = "imdb rating";
const COL_RUNTIME: &str = "runtime (mins)";
const COL_YEAR: &str = "year";
const COL_GENRES: &str = "genres";
const COL_DIRECTORS: &str = "directors";
const COL_MAIN_ACTORS: &str = "main actors";

const REQUIRED_COLUMNS: [&str; 6] = [
    COL_TITLE_TYPE,
    COL_YOUR_RATING,
    COL_RUNTIME,
    COL_YEAR,
    COL_GENRES,
    COL_DIRECTORS,
];

/// A row-level error encountered during ingest.
#[derive(Debug, Clone)]
pub struct RowError {
    pub line: usize,
    pub id: Option<String>,
    pub message: String,
}

/// Ingest output: validated films + row errors + counters.
#[derive(Debug, Clone)]
pub struct IngestedData {
    pub records: Vec<MovieRecord>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
    /// Rows with a title type other than `Film` (not errors).
    pub rows_filtered: usize,
}

/// Load and normalize a ratings CSV from disk.
pub fn load_records(path: &Path) -> Result<IngestedData, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open CSV '{}': {e}", path.display())))?;
    read_records(file)
}

/// Load and normalize a ratings CSV from any reader.
pub fn read_records<R: Read>(input: R) -> Result<IngestedData, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .clone();

    let header_map = build_header_map(&headers);
    ensure_required_columns_exist(&header_map)?;

    let mut records = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;
    let mut rows_filtered = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2: 1-based lines, plus the header line.
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    id: None,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        let row = parse_row(&record, &header_map);
        match normalize_row(&row) {
            Ok(Some(movie)) => records.push(movie),
            Ok(None) => rows_filtered += 1,
            Err(message) => row_errors.push(RowError {
                line,
                id: row.const_id.clone().or_else(|| row.title.clone()),
                message,
            }),
        }
    }

    for err in &row_errors {
        warn!(line = err.line, id = err.id.as_deref().unwrap_or(""), "skipping row: {}", err.message);
    }
    debug!(
        rows_read,
        films = records.len(),
        rows_filtered,
        skipped = row_errors.len(),
        "ingest complete"
    );

    Ok(IngestedData {
        records,
        row_errors,
        rows_read,
        rows_filtered,
    })
}

/// Validate one raw row.
///
/// Returns `Ok(None)` for titles that are not films, and `Err` when a
/// field needed by every dimension fails to coerce. A bad year or IMDb
/// rating is not an error: those fields simply become `None`.
pub fn normalize_row(row: &RawRow) -> Result<Option<MovieRecord>, String> {
    if row.title_type != FILM_TITLE_TYPE {
        return Ok(None);
    }

    let your_rating = row
        .your_rating
        .parse::<f64>()
        .map_err(|_| format!("Invalid `Your Rating` value '{}'.", row.your_rating))?;
    if !your_rating.is_finite() || !(RATING_MIN..=RATING_MAX).contains(&your_rating) {
        return Err(format!("`Your Rating` out of range 1..10: {your_rating}."));
    }

    let runtime_minutes = row
        .runtime_mins
        .parse::<u32>()
        .map_err(|_| format!("Invalid `Runtime (mins)` value '{}'.", row.runtime_mins))?;

    let original_title = row
        .original_title
        .clone()
        .or_else(|| row.title.clone())
        .ok_or_else(|| "Missing title.".to_string())?;

    Ok(Some(MovieRecord {
        original_title,
        title_type: row.title_type.clone(),
        your_rating,
        runtime_minutes,
        year: row.year.as_deref().and_then(|s| s.parse::<i32>().ok()),
        imdb_rating: parse_opt_f64(row.imdb_rating.as_deref()),
        genres: row.genres.clone(),
        directors: row.directors.clone(),
        actors: row.main_actors.clone(),
    }))
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports sometimes prefix the first header with a BOM.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn ensure_required_columns_exist(header_map: &HashMap<String, usize>) -> Result<(), AppError> {
    let mut missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !header_map.contains_key(*col))
        .collect();
    if !header_map.contains_key(COL_ORIGINAL_TITLE) && !header_map.contains_key(COL_TITLE) {
        missing.push(COL_ORIGINAL_TITLE);
    }

    if missing.is_empty() {
        return Ok(());
    }
    Err(AppError::new(
        2,
        format!("Missing required column(s): {}", missing.join(", ")),
    ))
}

fn parse_row(record: &StringRecord, header_map: &HashMap<String, usize>) -> RawRow {
    let text = |name: &str| get_optional(record, header_map, name).unwrap_or_default().to_string();
    let opt = |name: &str| get_optional(record, header_map, name).map(str::to_string);

    RawRow {
        const_id: opt(COL_CONST),
        title: opt(COL_TITLE),
        original_title: opt(COL_ORIGINAL_TITLE),
        title_type: text(COL_TITLE_TYPE),
        your_rating: text(COL_YOUR_RATING),
        imdb_rating: opt(COL_IMDB_RATING),
        runtime_mins: text(COL_RUNTIME),
        year: opt(COL_YEAR),
        genres: text(COL_GENRES),
        directors: text(COL_DIRECTORS),
        main_actors: opt(COL_MAIN_ACTORS),
    }
}

fn get_optional<'a>(record: &'a StringRecord, header_map: &HashMap<String, usize>, name: &str) -> Option<&'a str> {
    let idx = header_map.get(name)?;
    record.get(*idx).map(str::trim).filter(|s| !s.is_empty())
}

fn parse_opt_f64(s: Option<&str>) -> Option<f64> {
    let s = s?;
    let v = s.parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}

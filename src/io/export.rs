//! Export reports to JSON and ranked categories to CSV.
//!
//! The JSON file (`stats.json`) is the portable representation of a run and
//! can be read back for display. The CSV is meant to be easy to consume in
//! spreadsheets or downstream scripts.

use std::fs::File;
use std::path::Path;

use crate::domain::CategoryStat;
use crate::error::AppError;
use crate::report::Report;

/// Separator used to flatten member titles into one CSV cell.
const MOVIES_SEPARATOR: &str = "; ";

/// Write a report as pretty-printed JSON.
pub fn write_report_json(path: &Path, report: &Report) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create report JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, report)
        .map_err(|e| AppError::new(2, format!("Failed to write report JSON: {e}")))?;

    Ok(())
}

/// Read a report JSON file.
pub fn read_report_json(path: &Path) -> Result<Report, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open report JSON '{}': {e}", path.display())))?;
    let report: Report =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid report JSON: {e}")))?;
    Ok(report)
}

/// Write one ranked category list to CSV.
pub fn write_category_csv(path: &Path, stats: &[CategoryStat]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;

    writer
        .write_record(["name", "count", "approval_rate", "avg_rating", "movies"])
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for s in stats {
        writer
            .write_record([
                s.name.clone(),
                s.count.to_string(),
                format!("{:.4}", s.approval_rate),
                format!("{:.4}", s.avg_rating),
                s.movies.join(MOVIES_SEPARATOR),
            ])
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush export CSV: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StatsConfig, film};

    fn report() -> Report {
        let mut a = film("A", 8.0);
        a.genres = "Western".to_string();
        a.year = Some(1966);
        let mut b = film("B", 6.0);
        b.genres = "Western, Drammatico".to_string();
        Report::assemble(&[a, b], &StatsConfig::default()).unwrap()
    }

    #[test]
    fn json_keys_match_downstream_schema() {
        let value = serde_json::to_value(report()).unwrap();
        for key in [
            "total_days_watched",
            "avg_runtime_minutes",
            "favorites",
            "least_favorites",
            "most_watched_genres",
            "decades_data",
            "votes_data",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        let genre = &value["favorites"]["genres"][0];
        for key in ["name", "count", "approval_rate", "avg_rating", "movies"] {
            assert!(genre.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["decades_data"][0]["decade"], "1960s");
        assert_eq!(value["votes_data"][0]["vote"], 1);
    }

    #[test]
    fn json_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        let original = report();

        write_report_json(&path, &original).unwrap();
        assert_eq!(read_report_json(&path).unwrap(), original);
    }

    #[test]
    fn category_csv_flattens_movies() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("genres.csv");
        let r = report();

        write_category_csv(&path, &r.favorites.genres).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("name,count,approval_rate,avg_rating,movies"));
        assert_eq!(lines.next(), Some("Western,2,50.0000,7.0000,A; B"));
    }
}

//! Formatted terminal output.
//!
//! We keep formatting code in one place so the aggregation code stays clean
//! and output changes are localized.

use crate::domain::{CategoryStat, DecadeStat, VoteBucket};
use crate::io::ingest::IngestedData;
use crate::report::Report;

/// One-paragraph summary of what ingest kept and dropped.
pub fn format_ingest_summary(ingest: &IngestedData) -> String {
    let mut out = String::new();
    out.push_str("=== filmstats ===\n");
    out.push_str(&format!(
        "Rows: read={} | films={} | other titles={} | skipped={}\n",
        ingest.rows_read,
        ingest.records.len(),
        ingest.rows_filtered,
        ingest.row_errors.len(),
    ));
    for err in ingest.row_errors.iter().take(5) {
        out.push_str(&format!(
            "  line {}{}: {}\n",
            err.line,
            err.id.as_deref().map(|id| format!(" ({id})")).unwrap_or_default(),
            err.message
        ));
    }
    if ingest.row_errors.len() > 5 {
        out.push_str(&format!("  ... {} more\n", ingest.row_errors.len() - 5));
    }
    out
}

/// Format the whole report as terminal tables.
pub fn format_report(report: &Report) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Films: {} | avg rating {:.2} | runtime {} min ({:.1} days) | avg runtime {:.1} min\n\n",
        report.total_films,
        report.avg_rating,
        report.total_runtime_minutes,
        report.total_days_watched,
        report.avg_runtime_minutes,
    ));

    let sections: [(&str, &[CategoryStat]); 5] = [
        ("Favorite genres", &report.favorites.genres),
        ("Least favorite genres", &report.least_favorites.genres),
        ("Most watched genres", &report.most_watched_genres),
        ("Favorite directors", &report.favorites.directors),
        ("Favorite actors", &report.favorites.actors),
    ];
    for (title, rows) in sections {
        out.push_str(&format!("{title}:\n"));
        out.push_str(&format_category_table(rows));
        out.push('\n');
    }

    out.push_str("Decades:\n");
    out.push_str(&format_decade_table(&report.decades_data));
    out.push('\n');

    out.push_str("Votes (mine vs IMDb):\n");
    out.push_str(&format_vote_table(&report.votes_data));

    out
}

pub fn format_category_table(rows: &[CategoryStat]) -> String {
    if rows.is_empty() {
        return "  (none above threshold)\n".to_string();
    }

    let mut out = String::new();
    out.push_str(format!("{:<28} {:>6} {:>9} {:>7}\n", "name", "count", "approval", "avg").trim_end());
    out.push('\n');
    out.push_str(format!("{:-<28} {:-<6} {:-<9} {:-<7}\n", "", "", "", "").trim_end());
    out.push('\n');

    for r in rows {
        out.push_str(
            format!(
                "{:<28} {:>6} {:>8.1}% {:>7.2}\n",
                truncate(&r.name, 28),
                r.count,
                r.approval_rate,
                r.avg_rating,
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

fn format_decade_table(rows: &[DecadeStat]) -> String {
    let mut out = String::new();
    for d in rows {
        out.push_str(&format!("{:<8} {:>6} {:>7.2}\n", d.decade_label, d.count, d.avg_rating));
    }
    out
}

fn format_vote_table(rows: &[VoteBucket]) -> String {
    let mut out = String::new();
    for v in rows {
        out.push_str(&format!("{:>4} {:>6} {:>6}\n", v.vote_value, v.my_count, v.imdb_count));
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_width() {
        assert_eq!(truncate("Western", 28), "Western");
        let long = truncate("Il buono, il brutto, il cattivo", 10);
        assert_eq!(long.chars().count(), 10);
        assert!(long.ends_with('.'));
    }

    #[test]
    fn category_table_lists_rows() {
        let rows = vec![CategoryStat {
            name: "Western".to_string(),
            count: 3,
            approval_rate: 100.0,
            avg_rating: 8.333,
            movies: Vec::new(),
        }];
        let table = format_category_table(&rows);
        assert!(table.contains("Western"));
        assert!(table.contains("100.0%"));
        assert!(format_category_table(&[]).contains("none above threshold"));
    }
}

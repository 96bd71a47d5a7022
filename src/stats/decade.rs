//! Per-decade aggregation.

use std::collections::BTreeMap;

use tracing::trace;

use crate::domain::{DecadeStat, MovieRecord};

/// Start year of the decade containing `year` (floor division).
pub fn decade_of(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

pub fn decade_label(decade: i32) -> String {
    format!("{decade}s")
}

/// Group records by decade, oldest first. Records without a year are
/// skipped here and nowhere else.
pub fn aggregate_by_decade(records: &[MovieRecord]) -> Vec<DecadeStat> {
    let mut groups: BTreeMap<i32, (usize, f64)> = BTreeMap::new();
    let mut skipped = 0usize;

    for record in records {
        let Some(year) = record.year else {
            skipped += 1;
            continue;
        };
        let entry = groups.entry(decade_of(year)).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += record.your_rating;
    }

    trace!(decades = groups.len(), skipped, "aggregated decades");

    groups
        .into_iter()
        .map(|(decade, (count, rating_sum))| DecadeStat {
            decade_label: decade_label(decade),
            count,
            avg_rating: rating_sum / count as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::film;

    fn film_in(year: Option<i32>, rating: f64) -> MovieRecord {
        let mut m = film("X", rating);
        m.year = year;
        m
    }

    #[test]
    fn groups_and_sorts_chronologically() {
        let movies = vec![
            film_in(Some(1994), 8.0),
            film_in(Some(1995), 6.0),
            film_in(Some(1987), 9.0),
        ];
        let decades = aggregate_by_decade(&movies);

        let labels: Vec<&str> = decades.iter().map(|d| d.decade_label.as_str()).collect();
        assert_eq!(labels, vec!["1980s", "1990s"]);
        assert_eq!(decades[0].count, 1);
        assert_eq!(decades[1].count, 2);
        assert!((decades[1].avg_rating - 7.0).abs() < 1e-9);
    }

    #[test]
    fn missing_years_are_skipped() {
        let movies = vec![film_in(None, 3.0), film_in(Some(2001), 8.0)];
        let decades = aggregate_by_decade(&movies);
        assert_eq!(decades.len(), 1);
        assert_eq!(decades[0].decade_label, "2000s");
        assert!((decades[0].avg_rating - 8.0).abs() < 1e-9);
    }

    #[test]
    fn decade_boundaries() {
        assert_eq!(decade_of(1990), 1990);
        assert_eq!(decade_of(1999), 1990);
        assert_eq!(decade_of(2000), 2000);
        assert!(aggregate_by_decade(&[]).is_empty());
    }
}

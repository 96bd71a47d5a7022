//! Per-category aggregation with significance thresholds.
//!
//! A record with k keys in a dimension is counted once per key, so a film
//! tagged "Drama, War" contributes to both groups.

use indexmap::IndexMap;
use tracing::trace;

use crate::domain::{CategoryStat, DEFAULT_LIKED_THRESHOLD, Dimension, MovieRecord, StatsConfig};
use crate::stats::extract::extract;

/// Running totals for one key during a single aggregation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryAccumulator {
    pub count: usize,
    pub rating_sum: f64,
    pub liked_count: usize,
    pub member_titles: Vec<String>,
}

impl CategoryAccumulator {
    pub fn add(&mut self, record: &MovieRecord, liked_threshold: f64) {
        self.count += 1;
        self.rating_sum += record.your_rating;
        if record.your_rating >= liked_threshold {
            self.liked_count += 1;
        }
        self.member_titles.push(record.original_title.clone());
    }

    /// Derive rates. Accumulators only exist after at least one `add`, so
    /// `count` is never zero here.
    pub fn into_stat(self, name: String) -> CategoryStat {
        let n = self.count as f64;
        CategoryStat {
            name,
            count: self.count,
            approval_rate: self.liked_count as f64 / n * 100.0,
            avg_rating: self.rating_sum / n,
            movies: self.member_titles,
        }
    }
}

/// Fold `records` into one stat per key with at least `min_count` members.
///
/// Output follows first-seen key order.
pub fn aggregate<F>(records: &[MovieRecord], extractor: F, min_count: usize) -> Vec<CategoryStat>
where
    F: Fn(&MovieRecord) -> Vec<String>,
{
    aggregate_with_threshold(records, extractor, min_count, DEFAULT_LIKED_THRESHOLD)
}

pub fn aggregate_with_threshold<F>(
    records: &[MovieRecord],
    extractor: F,
    min_count: usize,
    liked_threshold: f64,
) -> Vec<CategoryStat>
where
    F: Fn(&MovieRecord) -> Vec<String>,
{
    let mut groups: IndexMap<String, CategoryAccumulator> = IndexMap::new();

    for record in records {
        for key in extractor(record) {
            groups.entry(key).or_default().add(record, liked_threshold);
        }
    }

    let distinct = groups.len();
    let stats: Vec<CategoryStat> = groups
        .into_iter()
        .filter(|(_, acc)| acc.count >= min_count)
        .map(|(name, acc)| acc.into_stat(name))
        .collect();

    trace!(distinct, kept = stats.len(), min_count, "aggregated categories");
    stats
}

/// Aggregate one dimension using the configured threshold policy.
pub fn aggregate_dimension(records: &[MovieRecord], dimension: Dimension, config: &StatsConfig) -> Vec<CategoryStat> {
    let min_count = config.min_count(dimension).resolve(records.len());
    aggregate_with_threshold(
        records,
        |r| extract(r, dimension),
        min_count,
        config.liked_threshold,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::film;

    #[test]
    fn single_key_rates_match_hand_computation() {
        let movies = vec![film("A", 8.0), film("B", 6.0), film("C", 9.0)];

        let results = aggregate(&movies, |_| vec!["TestGenre".to_string()], 1);
        assert_eq!(results.len(), 1);

        let stat = &results[0];
        assert_eq!(stat.name, "TestGenre");
        assert_eq!(stat.count, 3);
        assert!((stat.avg_rating - 23.0 / 3.0).abs() < 1e-9);
        assert!((stat.approval_rate - 2.0 / 3.0 * 100.0).abs() < 1e-9);
        assert_eq!(stat.movies, vec!["A", "B", "C"]);
    }

    #[test]
    fn keys_below_minimum_are_dropped() {
        let mut a = film("A", 7.0);
        a.directors = "Leone".to_string();
        let mut b = film("B", 5.0);
        b.directors = "Leone,Fellini".to_string();

        let results = aggregate(&[a, b], directors_of, 2);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Leone");
        assert!((results[0].approval_rate - 50.0).abs() < 1e-9);
    }

    #[test]
    fn multi_membership_counts_once_per_key_in_first_seen_order() {
        let mut a = film("A", 9.0);
        a.genres = "War, Drama".to_string();
        let mut b = film("B", 4.0);
        b.genres = "Drama".to_string();

        let results = aggregate(&[a, b], crate::stats::extract::genres, 1);
        let names: Vec<&str> = results.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["War", "Drama"]);
        assert_eq!(results[1].count, 2);
    }

    #[test]
    fn musica_merges_with_native_musical() {
        let mut a = film("A", 8.0);
        a.genres = "Musica".to_string();
        let mut b = film("B", 6.0);
        b.genres = "Musical, Comedy".to_string();

        let results = aggregate(&[a, b], crate::stats::extract::genres, 1);
        let musical = results.iter().find(|s| s.name == "Musical").unwrap();
        assert_eq!(musical.count, 2);
        assert!(results.iter().all(|s| s.name != "Musica"));
    }

    #[test]
    fn records_without_actors_do_not_create_groups() {
        let movies = vec![film("A", 8.0), film("B", 6.0)];
        let results = aggregate_dimension(&movies, Dimension::Actor, &StatsConfig {
            actor_min: crate::domain::MinCount::Fixed(1),
            ..StatsConfig::default()
        });
        assert!(results.is_empty());
    }

    #[test]
    fn surfaced_stats_respect_minimum_and_rate_bounds() {
        let mut movies = Vec::new();
        for (i, rating) in [1.0, 3.0, 7.0, 7.5, 10.0, 6.9, 8.0].iter().enumerate() {
            let mut m = film(&format!("M{i}"), *rating);
            m.genres = if i % 2 == 0 { "Drama, Noir" } else { "Drama" }.to_string();
            movies.push(m);
        }

        let results = aggregate(&movies, crate::stats::extract::genres, 3);
        assert!(!results.is_empty());
        for stat in &results {
            assert!(stat.count >= 3);
            assert!((0.0..=100.0).contains(&stat.approval_rate));
        }
    }

    fn directors_of(r: &MovieRecord) -> Vec<String> {
        crate::stats::extract::directors(r)
    }
}

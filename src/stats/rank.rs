//! Ranking of aggregated categories.
//!
//! Favorites and least-favorites are two ends of one composite-ranked
//! sequence, so the two lists can never disagree about ordering.

use std::cmp::Ordering;

use crate::domain::CategoryStat;

/// Which key orders a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBy {
    /// Approval rate desc, then average rating desc.
    Composite,
    /// Member count desc.
    Frequency,
}

/// Composite ordering. Exact float comparison only; ties fall through to
/// the stable sort.
pub fn composite_order(a: &CategoryStat, b: &CategoryStat) -> Ordering {
    b.approval_rate
        .total_cmp(&a.approval_rate)
        .then_with(|| b.avg_rating.total_cmp(&a.avg_rating))
}

pub fn frequency_order(a: &CategoryStat, b: &CategoryStat) -> Ordering {
    b.count.cmp(&a.count)
}

/// Sort a copy of `stats`. Equal keys keep their input order.
pub fn rank(stats: &[CategoryStat], by: RankBy) -> Vec<CategoryStat> {
    let mut sorted = stats.to_vec();
    match by {
        RankBy::Composite => sorted.sort_by(composite_order),
        RankBy::Frequency => sorted.sort_by(frequency_order),
    }
    sorted
}

/// A composite-ranked sequence sliced from either end.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeRanking {
    ranked: Vec<CategoryStat>,
}

impl CompositeRanking {
    pub fn new(stats: &[CategoryStat]) -> Self {
        Self {
            ranked: rank(stats, RankBy::Composite),
        }
    }

    /// Best `n` entries, best first.
    pub fn favorites(&self, n: usize) -> &[CategoryStat] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    /// Last `n` entries, in ranked order (the worst entry comes last).
    pub fn least_favorites(&self, n: usize) -> &[CategoryStat] {
        let start = self.ranked.len().saturating_sub(n);
        &self.ranked[start..]
    }
}

/// Top `n` of a frequency ranking.
pub fn most_frequent(stats: &[CategoryStat], n: usize) -> Vec<CategoryStat> {
    rank(stats, RankBy::Frequency).into_iter().take(n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(name: &str, count: usize, approval_rate: f64, avg_rating: f64) -> CategoryStat {
        CategoryStat {
            name: name.to_string(),
            count,
            approval_rate,
            avg_rating,
            movies: Vec::new(),
        }
    }

    fn names(stats: &[CategoryStat]) -> Vec<&str> {
        stats.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn composite_breaks_approval_ties_on_average() {
        let stats = vec![
            stat("Noir", 4, 50.0, 6.5),
            stat("Western", 5, 80.0, 7.4),
            stat("Musical", 12, 50.0, 6.9),
        ];
        let ranked = rank(&stats, RankBy::Composite);
        assert_eq!(names(&ranked), vec!["Western", "Musical", "Noir"]);
    }

    #[test]
    fn exact_ties_keep_insertion_order() {
        let stats = vec![
            stat("B", 3, 50.0, 7.0),
            stat("A", 3, 50.0, 7.0),
            stat("C", 9, 50.0, 7.0),
        ];
        assert_eq!(names(&rank(&stats, RankBy::Composite)), vec!["B", "A", "C"]);
        assert_eq!(names(&rank(&stats, RankBy::Frequency)), vec!["C", "B", "A"]);
    }

    #[test]
    fn near_equal_rates_are_not_treated_as_ties() {
        let stats = vec![
            stat("Low", 3, 66.666_666_666_666_6, 9.0),
            stat("High", 3, 66.666_666_666_666_7, 1.0),
        ];
        assert_eq!(names(&rank(&stats, RankBy::Composite)), vec!["High", "Low"]);
    }

    #[test]
    fn least_favorites_is_tail_of_same_ranking() {
        let stats: Vec<CategoryStat> = (0..8)
            .map(|i| stat(&format!("G{i}"), 3, i as f64 * 10.0, 5.0))
            .collect();
        let ranking = CompositeRanking::new(&stats);

        assert_eq!(names(ranking.favorites(3)), vec!["G7", "G6", "G5"]);
        assert_eq!(names(ranking.least_favorites(3)), vec!["G2", "G1", "G0"]);
    }

    #[test]
    fn slices_clamp_to_available_entries() {
        let stats = vec![stat("Only", 3, 10.0, 5.0)];
        let ranking = CompositeRanking::new(&stats);
        assert_eq!(ranking.favorites(5).len(), 1);
        assert_eq!(ranking.least_favorites(5).len(), 1);

        let empty = CompositeRanking::new(&[]);
        assert!(empty.favorites(5).is_empty());
        assert!(empty.least_favorites(5).is_empty());
        assert!(most_frequent(&[], 5).is_empty());
    }
}

//! Rating histograms for the personal and IMDb scales.

use crate::domain::{MovieRecord, VoteBucket};

pub const VOTE_BUCKETS: u8 = 10;

/// One bucket per integer vote 1..=10, always all ten.
pub fn build_vote_distribution(records: &[MovieRecord]) -> Vec<VoteBucket> {
    let mut buckets: Vec<VoteBucket> = (1..=VOTE_BUCKETS)
        .map(|vote_value| VoteBucket {
            vote_value,
            my_count: 0,
            imdb_count: 0,
        })
        .collect();

    for record in records {
        if let Some(idx) = bucket_index(record.your_rating) {
            buckets[idx].my_count += 1;
        }
        if let Some(idx) = record.imdb_rating.and_then(bucket_index) {
            buckets[idx].imdb_count += 1;
        }
    }

    buckets
}

/// Truncate to an integer vote; anything outside 1..=10 has no bucket.
fn bucket_index(rating: f64) -> Option<usize> {
    if !rating.is_finite() {
        return None;
    }
    let vote = rating.trunc();
    if vote < 1.0 || vote > f64::from(VOTE_BUCKETS) {
        return None;
    }
    Some(vote as usize - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::film;

    #[test]
    fn all_ten_buckets_present_when_empty() {
        let buckets = build_vote_distribution(&[]);
        assert_eq!(buckets.len(), 10);
        assert_eq!(buckets[0].vote_value, 1);
        assert_eq!(buckets[9].vote_value, 10);
        assert!(buckets.iter().all(|b| b.my_count == 0 && b.imdb_count == 0));
    }

    #[test]
    fn truncates_and_discards_out_of_range() {
        let mut a = film("A", 7.9);
        a.imdb_rating = Some(8.4);
        let mut b = film("B", 10.0);
        b.imdb_rating = Some(0.5);
        let mut c = film("C", 11.0);
        c.imdb_rating = None;

        let buckets = build_vote_distribution(&[a, b, c]);
        assert_eq!(buckets[6].my_count, 1);
        assert_eq!(buckets[9].my_count, 1);
        assert_eq!(buckets[7].imdb_count, 1);

        let my_total: usize = buckets.iter().map(|b| b.my_count).sum();
        let imdb_total: usize = buckets.iter().map(|b| b.imdb_count).sum();
        assert_eq!(my_total, 2);
        assert_eq!(imdb_total, 1);
    }

    #[test]
    fn non_finite_ratings_have_no_bucket() {
        assert_eq!(bucket_index(f64::NAN), None);
        assert_eq!(bucket_index(f64::INFINITY), None);
        assert_eq!(bucket_index(1.0), Some(0));
    }
}

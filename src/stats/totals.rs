//! Population-wide scalars.

use crate::domain::MovieRecord;
use crate::error::StatsError;

pub const MINUTES_PER_DAY: f64 = 60.0 * 24.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Totals {
    pub film_count: usize,
    pub avg_rating: f64,
    pub total_runtime_minutes: u64,
    pub total_days_watched: f64,
    pub avg_runtime_minutes: f64,
}

/// Arithmetic mean; fails instead of dividing by zero.
pub fn mean<I>(values: I, what: &'static str) -> Result<f64, StatsError>
where
    I: IntoIterator<Item = f64>,
{
    let (n, sum) = values
        .into_iter()
        .fold((0usize, 0.0), |(n, sum), v| (n + 1, sum + v));
    if n == 0 {
        return Err(StatsError::NoData(what));
    }
    Ok(sum / n as f64)
}

pub fn compute_totals(records: &[MovieRecord]) -> Result<Totals, StatsError> {
    let total_runtime_minutes: u64 = records.iter().map(|r| u64::from(r.runtime_minutes)).sum();

    Ok(Totals {
        film_count: records.len(),
        avg_rating: mean(records.iter().map(|r| r.your_rating), "average rating")?,
        total_runtime_minutes,
        total_days_watched: total_runtime_minutes as f64 / MINUTES_PER_DAY,
        avg_runtime_minutes: mean(
            records.iter().map(|r| f64::from(r.runtime_minutes)),
            "average runtime",
        )?,
    })
}

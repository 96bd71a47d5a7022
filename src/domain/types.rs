//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - built once by the ingest layer and shared read-only by every aggregation
//! - exported to JSON/CSV
//! - reloaded later for display

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The only title type admitted into the working set.
pub const FILM_TITLE_TYPE: &str = "Film";

/// Personal ratings at or above this value count as "liked".
pub const DEFAULT_LIKED_THRESHOLD: f64 = 7.0;

/// Lowest and highest valid rating (both scales).
pub const RATING_MIN: f64 = 1.0;
pub const RATING_MAX: f64 = 10.0;

/// A grouping axis over the category fields of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Genre,
    Director,
    Actor,
}

/// Minimum group size required for a category to be reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MinCount {
    /// An absolute minimum, independent of corpus size.
    Fixed(usize),
    /// `max(1, floor(total_films * fraction))`.
    Fraction(f64),
}

impl MinCount {
    /// Resolve the threshold for a population of `total_films` records.
    pub fn resolve(self, total_films: usize) -> usize {
        match self {
            MinCount::Fixed(n) => n,
            MinCount::Fraction(f) => {
                let scaled = (total_films as f64 * f).floor();
                if scaled.is_finite() && scaled >= 1.0 {
                    scaled as usize
                } else {
                    1
                }
            }
        }
    }
}

/// A raw row of CSV inputs, still text.
///
/// Optional columns are `None` when the column is absent or the cell is blank.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    pub const_id: Option<String>,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub title_type: String,
    pub your_rating: String,
    pub imdb_rating: Option<String>,
    pub runtime_mins: String,
    pub year: Option<String>,
    pub genres: String,
    pub directors: String,
    pub main_actors: Option<String>,
}

/// A validated film from the viewing log.
///
/// Category fields stay as the source's joined text; splitting them is the job
/// of `stats::extract`, which knows each field's delimiter conventions.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub original_title: String,
    pub title_type: String,
    /// Personal rating in `[1, 10]`.
    pub your_rating: f64,
    pub runtime_minutes: u32,
    /// `None` when the source year did not parse; only the decade view cares.
    pub year: Option<i32>,
    pub imdb_rating: Option<f64>,
    pub genres: String,
    pub directors: String,
    pub actors: Option<String>,
}

/// Aggregated view of one category key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStat {
    pub name: String,
    pub count: usize,
    /// Percentage of members rated at or above the liked threshold.
    pub approval_rate: f64,
    pub avg_rating: f64,
    /// Member titles in first-seen order.
    pub movies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecadeStat {
    #[serde(rename = "decade")]
    pub decade_label: String,
    pub count: usize,
    pub avg_rating: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteBucket {
    #[serde(rename = "vote")]
    pub vote_value: u8,
    pub my_count: usize,
    pub imdb_count: usize,
}

/// Thresholds and slice sizes used by the report assembler.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsConfig {
    pub genre_min: MinCount,
    pub director_min: MinCount,
    pub actor_min: MinCount,
    pub liked_threshold: f64,
    /// Length of every favorites / least-favorites / most-watched list.
    pub top_n: usize,
}

impl StatsConfig {
    pub fn min_count(&self, dimension: Dimension) -> MinCount {
        match dimension {
            Dimension::Genre => self.genre_min,
            Dimension::Director => self.director_min,
            Dimension::Actor => self.actor_min,
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            genre_min: MinCount::Fraction(0.1),
            director_min: MinCount::Fixed(2),
            actor_min: MinCount::Fixed(3),
            liked_threshold: DEFAULT_LIKED_THRESHOLD,
            top_n: 5,
        }
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub csv_path: PathBuf,
    pub stats: StatsConfig,
    pub export_json: Option<PathBuf>,
    pub export_csv: Option<PathBuf>,
    pub export_dimension: Dimension,
}

#[cfg(test)]
pub(crate) fn film(title: &str, your_rating: f64) -> MovieRecord {
    MovieRecord {
        original_title: title.to_string(),
        title_type: FILM_TITLE_TYPE.to_string(),
        your_rating,
        runtime_minutes: 100,
        year: None,
        imdb_rating: None,
        genres: String::new(),
        directors: String::new(),
        actors: None,
    }
}

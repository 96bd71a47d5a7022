//! Report assembly and formatted terminal output.
//!
//! The assembler only slices sequences that the `stats` layer has already
//! aggregated and ranked; no filtering happens here.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{CategoryStat, DecadeStat, Dimension, MovieRecord, StatsConfig, VoteBucket};
use crate::error::StatsError;
use crate::stats::{
    CompositeRanking, aggregate_by_decade, aggregate_dimension, build_vote_distribution, compute_totals,
    most_frequent,
};

pub mod format;

pub use format::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorites {
    pub genres: Vec<CategoryStat>,
    pub directors: Vec<CategoryStat>,
    pub actors: Vec<CategoryStat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeastFavorites {
    pub genres: Vec<CategoryStat>,
}

/// Read-only snapshot of every statistic for one record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub total_films: usize,
    pub avg_rating: f64,
    pub total_runtime_minutes: u64,
    pub total_days_watched: f64,
    pub avg_runtime_minutes: f64,
    pub favorites: Favorites,
    pub least_favorites: LeastFavorites,
    pub most_watched_genres: Vec<CategoryStat>,
    pub decades_data: Vec<DecadeStat>,
    pub votes_data: Vec<VoteBucket>,
}

impl Report {
    /// Build the report for `records`.
    ///
    /// Fails with `StatsError::NoData` when `records` is empty, since the
    /// population averages are undefined.
    pub fn assemble(records: &[MovieRecord], config: &StatsConfig) -> Result<Self, StatsError> {
        let totals = compute_totals(records)?;

        // Dimensions share nothing but the immutable records.
        let (genres, (directors, actors)) = rayon::join(
            || aggregate_dimension(records, Dimension::Genre, config),
            || {
                rayon::join(
                    || aggregate_dimension(records, Dimension::Director, config),
                    || aggregate_dimension(records, Dimension::Actor, config),
                )
            },
        );
        debug!(
            genres = genres.len(),
            directors = directors.len(),
            actors = actors.len(),
            "categories above threshold"
        );

        let n = config.top_n;
        let genre_ranking = CompositeRanking::new(&genres);
        let director_ranking = CompositeRanking::new(&directors);
        let actor_ranking = CompositeRanking::new(&actors);

        Ok(Report {
            total_films: totals.film_count,
            avg_rating: totals.avg_rating,
            total_runtime_minutes: totals.total_runtime_minutes,
            total_days_watched: totals.total_days_watched,
            avg_runtime_minutes: totals.avg_runtime_minutes,
            favorites: Favorites {
                genres: genre_ranking.favorites(n).to_vec(),
                directors: director_ranking.favorites(n).to_vec(),
                actors: actor_ranking.favorites(n).to_vec(),
            },
            least_favorites: LeastFavorites {
                genres: genre_ranking.least_favorites(n).to_vec(),
            },
            most_watched_genres: most_frequent(&genres, n),
            decades_data: aggregate_by_decade(records),
            votes_data: build_vote_distribution(records),
        })
    }
}

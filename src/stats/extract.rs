//! Category key extraction.
//!
//! Each dimension has its own delimiter conventions in the ratings export:
//! genres are joined with `", "`, people with a bare `,`. Extraction never
//! mutates the record and may legitimately yield no keys.

use crate::domain::{Dimension, MovieRecord};

/// Known data-entry variant in the genre column.
const GENRE_ALIASES: &[(&str, &str)] = &[("Musica", "Musical")];

/// Keys contributed by `record` along `dimension`.
pub fn extract(record: &MovieRecord, dimension: Dimension) -> Vec<String> {
    match dimension {
        Dimension::Genre => genres(record),
        Dimension::Director => directors(record),
        Dimension::Actor => actors(record),
    }
}

pub fn genres(record: &MovieRecord) -> Vec<String> {
    record
        .genres
        .split(", ")
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(|g| canonical_genre(g).to_string())
        .collect()
}

pub fn directors(record: &MovieRecord) -> Vec<String> {
    split_names(&record.directors)
}

/// Actors are optional: a missing or blank column yields no keys.
pub fn actors(record: &MovieRecord) -> Vec<String> {
    match record.actors.as_deref() {
        Some(field) if !field.trim().is_empty() => split_names(field),
        _ => Vec::new(),
    }
}

fn canonical_genre(genre: &str) -> &str {
    GENRE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == genre)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(genre)
}

fn split_names(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

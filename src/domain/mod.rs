//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - raw and validated film rows (`RawRow`, `MovieRecord`)
//! - aggregation outputs (`CategoryStat`, `DecadeStat`, `VoteBucket`)
//! - threshold and run configuration (`MinCount`, `StatsConfig`, `RunConfig`)

pub mod types;

pub use types::*;

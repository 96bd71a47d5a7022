//! Input/output helpers.
//!
//! - CSV ingest + row normalization (`ingest`)
//! - report JSON and category CSV exports (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;

//! `filmstats` library crate.
//!
//! The binary (`filmstats`) is a thin wrapper around this library so that:
//!
//! - the aggregation core is testable without spawning processes
//! - the core never touches the filesystem; `io` does that at the edges
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
pub mod stats;

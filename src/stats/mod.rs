//! Aggregation and ranking engine.
//!
//! Responsibilities:
//!
//! - split records into category keys per dimension (`extract`)
//! - fold keys into thresholded per-category stats (`aggregate`)
//! - composite and frequency rankings (`rank`)
//! - decade groups, vote histograms, population scalars

pub mod aggregate;
pub mod decade;
pub mod extract;
pub mod rank;
pub mod totals;
pub mod votes;

pub use aggregate::*;
pub use decade::*;
pub use extract::*;
pub use rank::*;
pub use totals::*;
pub use votes::*;

//! Route comparison and green-alternative recommendation.
//!
//! This module fans one origin/destination query out to the directions
//! provider, turns the per-lookup outcomes into per-mode route results, and
//! scores them: a carbon-first ranking for presentation, and at most one
//! suggestion of a lower-emission mode that is competitive on time.

mod aggregate;
mod config;
mod rank;
mod suggest;


pub use aggregate::{Aggregator, Comparison, derive_route};
pub use config::CompareConfig;
pub use rank::{fastest_route, rank_routes, relative_time_diff};
pub use suggest::{Suggestion, SuggestionRule, SuggestionThresholds, suggest_alternative};

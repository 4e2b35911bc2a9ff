//! Directions provider adapter.
//!
//! Wraps one external directions lookup per provider mode and normalizes the
//! response, or the failure, into a common shape. The live client talks to
//! the Google Directions JSON API; a mock serves scripted results for tests
//! and offline development.
//!
//! Key characteristics of the provider:
//! - Distances are metres and durations seconds, as integers
//! - Traffic-aware durations are only returned for driving requests that
//!   carry a departure time
//! - A `200 OK` HTTP response can still carry a non-`OK` status in the body

mod client;
mod convert;
mod error;
mod mock;
mod provider;
mod types;

pub use client::{DirectionsClient, DirectionsConfig};
pub use convert::convert_response;
pub use error::DirectionsError;
pub use mock::MockDirectionsClient;
pub use provider::{DirectionsBackend, DirectionsProvider, ProviderRequest, ProviderRoute};
pub use types::{DirectionsLeg, DirectionsResponse, DirectionsRoute, TextValue};

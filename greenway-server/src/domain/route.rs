//! Queries and per-mode route results.

use super::coord::{Bounds, LatLng};
use super::mode::ModeId;

/// An origin/destination comparison query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteQuery {
    pub origin: LatLng,
    pub destination: LatLng,

    /// Departure time in epoch seconds, used for traffic-aware lookups.
    /// `None` means "now".
    pub departure_time: Option<i64>,
}

impl RouteQuery {
    pub fn new(origin: LatLng, destination: LatLng) -> Self {
        Self {
            origin,
            destination,
            departure_time: None,
        }
    }

    pub fn with_departure_time(mut self, epoch_secs: i64) -> Self {
        self.departure_time = Some(epoch_secs);
        self
    }
}

/// The normalized outcome of one mode for one query.
///
/// Built once by the aggregator and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    pub mode: ModeId,
    pub distance_km: f64,

    /// Duration without traffic, in minutes.
    pub duration_min: f64,

    /// Traffic-aware duration in minutes, only for driving-like modes
    /// when the provider returned it.
    pub duration_with_traffic_min: Option<f64>,

    pub carbon_kg: f64,

    /// Encoded path. Empty when the provider omitted geometry.
    pub polyline: String,

    pub bounds: Option<Bounds>,
}

impl RouteResult {
    pub fn has_traffic_data(&self) -> bool {
        self.duration_with_traffic_min.is_some()
    }

    /// Extra minutes spent in traffic, if known.
    pub fn traffic_delay_min(&self) -> Option<f64> {
        self.duration_with_traffic_min
            .map(|with_traffic| with_traffic - self.duration_min)
    }
}

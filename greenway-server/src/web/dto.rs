//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::catalog::ModeDescriptor;
use crate::domain::{Bounds, LatLng, RouteResult};
use crate::planner::Comparison;

/// Query string of a comparison request.
///
/// Every field is optional here; the handler reports missing or malformed
/// values.
#[derive(Debug, Default, Deserialize)]
pub struct RoutesQuery {
    /// Origin as `lat,lng`
    pub origin: Option<String>,

    /// Destination as `lat,lng`
    pub destination: Option<String>,

    /// Departure time in epoch seconds (defaults to now)
    pub departure_time: Option<String>,
}

/// A coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLngDto {
    pub lat: f64,
    pub lng: f64,
}

impl From<LatLng> for LatLngDto {
    fn from(p: LatLng) -> Self {
        Self {
            lat: p.lat(),
            lng: p.lng(),
        }
    }
}

/// Viewport of a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundsDto {
    pub southwest: LatLngDto,
    pub northeast: LatLngDto,
}

impl From<Bounds> for BoundsDto {
    fn from(b: Bounds) -> Self {
        Self {
            southwest: b.southwest.into(),
            northeast: b.northeast.into(),
        }
    }
}

/// One mode's route.
#[derive(Debug, Clone, Serialize)]
pub struct RouteDto {
    /// Mode identifier (e.g., "driving", "e-bike")
    pub mode: String,

    pub distance_km: f64,

    /// Duration without traffic, in minutes
    pub duration_min: f64,

    /// Traffic-aware duration in minutes (driving-like modes only)
    pub duration_with_traffic_min: Option<f64>,

    pub carbon_kg: f64,

    /// Encoded polyline, empty when unknown
    pub polyline: String,

    pub bounds: Option<BoundsDto>,

    pub has_traffic_data: bool,

    /// Extra minutes spent in traffic, when known
    pub traffic_delay_min: Option<f64>,
}

impl RouteDto {
    /// Create from a domain route result.
    pub fn from_route(route: &RouteResult) -> Self {
        Self {
            mode: route.mode.to_string(),
            distance_km: route.distance_km,
            duration_min: route.duration_min,
            duration_with_traffic_min: route.duration_with_traffic_min,
            carbon_kg: route.carbon_kg,
            polyline: route.polyline.clone(),
            bounds: route.bounds.map(BoundsDto::from),
            has_traffic_data: route.has_traffic_data(),
            traffic_delay_min: route.traffic_delay_min(),
        }
    }
}

/// Response to a comparison request.
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    /// Routes in catalog order
    pub routes: Vec<RouteDto>,

    /// Greener-alternative message, if one applies
    pub suggestion: Option<String>,

    /// Modes with no route for this query
    pub unavailable: Vec<String>,
}

impl CompareResponse {
    /// Create from a comparison.
    pub fn from_comparison(comparison: &Comparison) -> Self {
        Self {
            routes: comparison.routes.iter().map(RouteDto::from_route).collect(),
            suggestion: comparison.suggestion.as_ref().map(|s| s.message.clone()),
            unavailable: comparison
                .unavailable
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

/// A catalog entry as listed by `/api/modes`.
#[derive(Debug, Serialize)]
pub struct ModeDto {
    pub id: String,
    pub provider_mode: String,
    pub transit_vehicle: Option<String>,
    pub emissions_factor_kg_per_km: f64,
    pub duration_multiplier: f64,

    /// Synthesized from another mode's lookup
    pub derived: bool,
}

impl ModeDto {
    pub fn from_descriptor(descriptor: &ModeDescriptor) -> Self {
        Self {
            id: descriptor.id.to_string(),
            provider_mode: descriptor.provider_mode.to_string(),
            transit_vehicle: descriptor.transit_vehicle.map(|v| v.to_string()),
            emissions_factor_kg_per_km: descriptor.emissions_factor_kg_per_km,
            duration_multiplier: descriptor.duration_multiplier,
            derived: descriptor.is_derived(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

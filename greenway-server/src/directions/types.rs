//! Directions API response DTOs.
//!
//! These types map directly to the Google Directions JSON response. Only the
//! fields the adapter reads are modelled; everything else is ignored.

use serde::Deserialize;

/// Top-level response from `directions/json`.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    /// `OK`, `ZERO_RESULTS`, `NOT_FOUND`, `REQUEST_DENIED`, ...
    pub status: String,

    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,

    /// Human-readable detail accompanying a non-OK status.
    pub error_message: Option<String>,
}

/// One candidate route. The adapter only uses the first.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsRoute {
    pub bounds: Option<BoundsDto>,

    pub overview_polyline: Option<PolylineDto>,

    #[serde(default)]
    pub legs: Vec<DirectionsLeg>,
}

/// A leg between two waypoints. With no waypoints there is exactly one.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsLeg {
    pub distance: Option<TextValue>,

    pub duration: Option<TextValue>,

    /// Only present for driving requests with a departure time.
    pub duration_in_traffic: Option<TextValue>,
}

/// A `{ "text": "...", "value": n }` pair. `value` is metres or seconds.
#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    pub value: f64,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PolylineDto {
    pub points: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoundsDto {
    pub northeast: LatLngDto,
    pub southwest: LatLngDto,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLngDto {
    pub lat: f64,
    pub lng: f64,
}

//! Conversion from provider DTOs to [`ProviderRoute`].

use tracing::debug;

use crate::domain::{Bounds, LatLng};

use super::error::DirectionsError;
use super::provider::ProviderRoute;
use super::types::{BoundsDto, DirectionsResponse};

/// Normalize a directions response into a [`ProviderRoute`].
///
/// Uses the first leg of the first route. A non-`OK` status, an empty route
/// list, or a leg without distance or duration is an error. Bounds outside
/// the valid coordinate range are dropped rather than failing the lookup.
pub fn convert_response(response: &DirectionsResponse) -> Result<ProviderRoute, DirectionsError> {
    match response.status.as_str() {
        "OK" => {}
        "ZERO_RESULTS" | "NOT_FOUND" => return Err(DirectionsError::NoRoute),
        "REQUEST_DENIED" => return Err(DirectionsError::Unauthorized),
        "OVER_QUERY_LIMIT" | "OVER_DAILY_LIMIT" => return Err(DirectionsError::RateLimited),
        other => {
            return Err(DirectionsError::Status {
                status: other.to_string(),
                message: response.error_message.clone(),
            });
        }
    }

    let route = response.routes.first().ok_or(DirectionsError::NoRoute)?;
    let leg = route.legs.first().ok_or(DirectionsError::NoRoute)?;

    let distance = leg.distance.as_ref().ok_or_else(|| missing("distance"))?;
    let duration = leg.duration.as_ref().ok_or_else(|| missing("duration"))?;

    if !is_valid_quantity(distance.value) || !is_valid_quantity(duration.value) {
        return Err(DirectionsError::Json {
            message: format!(
                "negative or non-finite leg values: distance={}, duration={}",
                distance.value, duration.value
            ),
            body: None,
        });
    }

    let duration_in_traffic_s = leg
        .duration_in_traffic
        .as_ref()
        .map(|d| d.value)
        .filter(|v| is_valid_quantity(*v));

    let polyline = route
        .overview_polyline
        .as_ref()
        .map(|p| p.points.clone())
        .filter(|p| !p.is_empty());

    let bounds = route.bounds.as_ref().and_then(convert_bounds);

    Ok(ProviderRoute {
        distance_m: distance.value,
        duration_s: duration.value,
        duration_in_traffic_s,
        polyline,
        bounds,
    })
}

fn missing(field: &str) -> DirectionsError {
    DirectionsError::Json {
        message: format!("leg has no {field}"),
        body: None,
    }
}

pub(super) fn is_valid_quantity(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn convert_bounds(dto: &BoundsDto) -> Option<Bounds> {
    let southwest = LatLng::new(dto.southwest.lat, dto.southwest.lng);
    let northeast = LatLng::new(dto.northeast.lat, dto.northeast.lng);

    match (southwest, northeast) {
        (Ok(sw), Ok(ne)) => Some(Bounds::new(sw, ne)),
        (Err(e), _) | (_, Err(e)) => {
            debug!(error = %e, "dropping invalid route bounds");
            None
        }
    }
}

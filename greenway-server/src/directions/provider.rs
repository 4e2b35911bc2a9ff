//! Provider abstraction and the normalized per-lookup shapes.

use std::future::Future;

use serde::Deserialize;

use crate::domain::{Bounds, LatLng, ProviderMode, RouteQuery, TransitVehicle};

use super::client::DirectionsClient;
use super::error::DirectionsError;
use super::mock::MockDirectionsClient;

/// One lookup sent to the directions provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRequest {
    pub origin: LatLng,
    pub destination: LatLng,
    pub mode: ProviderMode,

    /// Transit vehicle filter. Only meaningful for transit.
    pub transit_vehicle: Option<TransitVehicle>,

    /// Epoch seconds. Set for driving-like lookups only.
    pub departure_time: Option<i64>,
}

impl ProviderRequest {
    /// Build the request for one provider lookup of a query.
    ///
    /// Driving-like lookups always carry a departure time (the query's, or
    /// `now`) so the provider can return a traffic-aware duration; other
    /// modes never do.
    pub fn for_query(
        query: &RouteQuery,
        mode: ProviderMode,
        transit_vehicle: Option<TransitVehicle>,
        now: i64,
    ) -> Self {
        let departure_time = mode
            .is_driving_like()
            .then(|| query.departure_time.unwrap_or(now));

        Self {
            origin: query.origin,
            destination: query.destination,
            mode,
            transit_vehicle: transit_vehicle.filter(|_| mode == ProviderMode::Transit),
            departure_time,
        }
    }
}

/// A successful lookup, normalized to provider units.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderRoute {
    pub distance_m: f64,
    pub duration_s: f64,

    #[serde(default)]
    pub duration_in_traffic_s: Option<f64>,

    #[serde(default)]
    pub polyline: Option<String>,

    #[serde(default)]
    pub bounds: Option<Bounds>,
}

/// Source of directions lookups.
///
/// This abstraction allows the aggregator to be tested with mock data.
pub trait DirectionsProvider {
    /// Look up one route. Any failure applies to this lookup only.
    fn route(
        &self,
        request: &ProviderRequest,
    ) -> impl Future<Output = Result<ProviderRoute, DirectionsError>> + Send;
}

/// The provider the server runs with: live API or scripted mock.
#[derive(Debug, Clone)]
pub enum DirectionsBackend {
    Live(DirectionsClient),
    Mock(MockDirectionsClient),
}

impl DirectionsProvider for DirectionsBackend {
    async fn route(&self, request: &ProviderRequest) -> Result<ProviderRoute, DirectionsError> {
        match self {
            DirectionsBackend::Live(client) => client.fetch_route(request).await,
            DirectionsBackend::Mock(mock) => mock.fetch_route(request).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> RouteQuery {
        RouteQuery::new(
            LatLng::new(42.3601, -71.0589).unwrap(),
            LatLng::new(42.3736, -71.1097).unwrap(),
        )
    }

    #[test]
    fn driving_defaults_departure_to_now() {
        let req = ProviderRequest::for_query(&query(), ProviderMode::Driving, None, 1_000);
        assert_eq!(req.departure_time, Some(1_000));
    }

    #[test]
    fn driving_uses_query_departure() {
        let q = query().with_departure_time(5_000);
        let req = ProviderRequest::for_query(&q, ProviderMode::Driving, None, 1_000);
        assert_eq!(req.departure_time, Some(5_000));
    }

    #[test]
    fn non_driving_omits_departure() {
        let q = query().with_departure_time(5_000);
        for mode in [
            ProviderMode::Transit,
            ProviderMode::Walking,
            ProviderMode::Bicycling,
        ] {
            let req = ProviderRequest::for_query(&q, mode, None, 1_000);
            assert_eq!(req.departure_time, None);
        }
    }

    #[test]
    fn vehicle_filter_only_for_transit() {
        let req = ProviderRequest::for_query(
            &query(),
            ProviderMode::Transit,
            Some(TransitVehicle::Tram),
            0,
        );
        assert_eq!(req.transit_vehicle, Some(TransitVehicle::Tram));

        let req = ProviderRequest::for_query(
            &query(),
            ProviderMode::Walking,
            Some(TransitVehicle::Tram),
            0,
        );
        assert_eq!(req.transit_vehicle, None);
    }

    #[test]
    fn provider_route_from_fixture_json() {
        let json = r#"{"distance_m": 5210, "duration_s": 720}"#;
        let route: ProviderRoute = serde_json::from_str(json).unwrap();
        assert_eq!(route.distance_m, 5210.0);
        assert_eq!(route.duration_in_traffic_s, None);
        assert_eq!(route.polyline, None);
    }
}

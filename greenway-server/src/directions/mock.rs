//! Mock directions client for testing without API access.
//!
//! Serves scripted results keyed by (provider mode, transit vehicle), either
//! built in code or loaded from a JSON fixture file.

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Deserialize;

use crate::domain::{ProviderMode, TransitVehicle};

use super::convert::is_valid_quantity;
use super::error::DirectionsError;
use super::provider::{DirectionsProvider, ProviderRequest, ProviderRoute};

type LookupKey = (ProviderMode, Option<TransitVehicle>);

#[derive(Debug, Clone)]
enum MockOutcome {
    Route(ProviderRoute),
    Failure(String),
}

/// One entry of a fixture file.
#[derive(Debug, Deserialize)]
struct FixtureEntry {
    mode: ProviderMode,
    #[serde(default)]
    transit_vehicle: Option<TransitVehicle>,
    #[serde(default)]
    route: Option<ProviderRoute>,
    #[serde(default)]
    error: Option<String>,
}

/// Mock directions client that serves scripted lookups.
///
/// Lookups with no scripted outcome fail with [`DirectionsError::NoRoute`].
#[derive(Debug, Clone, Default)]
pub struct MockDirectionsClient {
    outcomes: HashMap<LookupKey, MockOutcome>,
    delays: HashMap<LookupKey, Duration>,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<ProviderRequest>>>,
}

impl MockDirectionsClient {
    /// Create a mock with no scripted lookups.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful lookup.
    pub fn with_route(
        mut self,
        mode: ProviderMode,
        vehicle: Option<TransitVehicle>,
        route: ProviderRoute,
    ) -> Self {
        self.outcomes.insert((mode, vehicle), MockOutcome::Route(route));
        self
    }

    /// Script a failing lookup.
    pub fn with_failure(
        mut self,
        mode: ProviderMode,
        vehicle: Option<TransitVehicle>,
        message: impl Into<String>,
    ) -> Self {
        self.outcomes
            .insert((mode, vehicle), MockOutcome::Failure(message.into()));
        self
    }

    /// Delay a lookup before it answers.
    pub fn with_delay(
        mut self,
        mode: ProviderMode,
        vehicle: Option<TransitVehicle>,
        delay: Duration,
    ) -> Self {
        self.delays.insert((mode, vehicle), delay);
        self
    }

    /// Load scripted lookups from a JSON fixture file.
    ///
    /// The file holds an array of `{mode, transit_vehicle?, route?, error?}`
    /// objects; each must have exactly one of `route` or `error`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DirectionsError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|e| {
            DirectionsError::NotConfigured(format!("Failed to read {:?}: {}", path, e))
        })?;

        let entries: Vec<FixtureEntry> =
            serde_json::from_str(&json).map_err(|e| DirectionsError::Json {
                message: format!("Failed to parse {:?}: {}", path, e),
                body: None,
            })?;

        let mut mock = Self::new();
        for entry in entries {
            mock = match (entry.route, entry.error) {
                (Some(route), None) => {
                    check_fixture_route(entry.mode, &route)?;
                    mock.with_route(entry.mode, entry.transit_vehicle, route)
                }
                (None, Some(error)) => mock.with_failure(entry.mode, entry.transit_vehicle, error),
                _ => {
                    return Err(DirectionsError::NotConfigured(format!(
                        "fixture entry for {} must have exactly one of route or error",
                        entry.mode
                    )));
                }
            };
        }

        Ok(mock)
    }

    /// Answer a lookup from the script.
    pub async fn fetch_route(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderRoute, DirectionsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut log) = self.requests.lock() {
            log.push(request.clone());
        }

        let key = (request.mode, request.transit_vehicle);

        if let Some(delay) = self.delays.get(&key) {
            tokio::time::sleep(*delay).await;
        }

        match self.outcomes.get(&key) {
            Some(MockOutcome::Route(route)) => Ok(route.clone()),
            Some(MockOutcome::Failure(message)) => Err(DirectionsError::Status {
                status: "MOCK_FAILURE".to_string(),
                message: Some(message.clone()),
            }),
            None => Err(DirectionsError::NoRoute),
        }
    }

    /// Number of lookups answered so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }
}

/// Fixture routes must hold the same values a live lookup could return.
fn check_fixture_route(mode: ProviderMode, route: &ProviderRoute) -> Result<(), DirectionsError> {
    let values = [
        ("distance_m", Some(route.distance_m)),
        ("duration_s", Some(route.duration_s)),
        ("duration_in_traffic_s", route.duration_in_traffic_s),
    ];

    for (field, value) in values {
        if let Some(v) = value.filter(|v| !is_valid_quantity(*v)) {
            return Err(DirectionsError::NotConfigured(format!(
                "fixture route for {mode} has invalid {field}: {v}"
            )));
        }
    }

    Ok(())
}

impl DirectionsProvider for MockDirectionsClient {
    async fn route(&self, request: &ProviderRequest) -> Result<ProviderRoute, DirectionsError> {
        self.fetch_route(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LatLng, RouteQuery};
    use std::io::Write;

    fn request(mode: ProviderMode, vehicle: Option<TransitVehicle>) -> ProviderRequest {
        let query = RouteQuery::new(
            LatLng::new(42.3601, -71.0589).unwrap(),
            LatLng::new(42.3736, -71.1097).unwrap(),
        );
        ProviderRequest::for_query(&query, mode, vehicle, 0)
    }

    fn route(distance_m: f64, duration_s: f64) -> ProviderRoute {
        ProviderRoute {
            distance_m,
            duration_s,
            duration_in_traffic_s: None,
            polyline: None,
            bounds: None,
        }
    }

    #[tokio::test]
    async fn serves_scripted_route() {
        let mock = MockDirectionsClient::new().with_route(
            ProviderMode::Walking,
            None,
            route(1000.0, 720.0),
        );

        let result = mock.route(&request(ProviderMode::Walking, None)).await.unwrap();
        assert_eq!(result.distance_m, 1000.0);
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn vehicle_filter_is_part_of_key() {
        let mock = MockDirectionsClient::new().with_route(
            ProviderMode::Transit,
            Some(TransitVehicle::Bus),
            route(1.0, 1.0),
        );

        assert!(
            mock.route(&request(ProviderMode::Transit, Some(TransitVehicle::Bus)))
                .await
                .is_ok()
        );
        assert!(matches!(
            mock.route(&request(ProviderMode::Transit, Some(TransitVehicle::Tram)))
                .await,
            Err(DirectionsError::NoRoute)
        ));
    }

    #[tokio::test]
    async fn scripted_failure() {
        let mock =
            MockDirectionsClient::new().with_failure(ProviderMode::Driving, None, "boom");

        let err = mock
            .route(&request(ProviderMode::Driving, None))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("boom"));
    }

    #[tokio::test]
    async fn records_requests() {
        let mock = MockDirectionsClient::new();
        let _ = mock.route(&request(ProviderMode::Driving, None)).await;
        let _ = mock.route(&request(ProviderMode::Walking, None)).await;

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].mode, ProviderMode::Driving);
        assert_eq!(requests[0].departure_time, Some(0));
        assert_eq!(requests[1].departure_time, None);
    }

    #[tokio::test]
    async fn clones_share_call_count() {
        let mock = MockDirectionsClient::new();
        let clone = mock.clone();
        let _ = clone.route(&request(ProviderMode::Walking, None)).await;
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn load_fixture_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"mode": "driving", "route": {{"distance_m": 5000, "duration_s": 600,
                  "duration_in_traffic_s": 780}}}},
                {{"mode": "transit", "transit_vehicle": "tram", "error": "ZERO_RESULTS"}}
            ]"#
        )
        .unwrap();

        let mock = MockDirectionsClient::from_json_file(file.path()).unwrap();

        let driving = mock.route(&request(ProviderMode::Driving, None)).await.unwrap();
        assert_eq!(driving.duration_in_traffic_s, Some(780.0));
        assert!(
            mock.route(&request(ProviderMode::Transit, Some(TransitVehicle::Tram)))
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn load_bundled_fixture() {
        let mock = MockDirectionsClient::from_json_file("data/mock_directions.json").unwrap();
        let driving = mock.route(&request(ProviderMode::Driving, None)).await.unwrap();
        assert!(driving.distance_m > 0.0);
    }

    #[test]
    fn fixture_rejects_negative_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"mode": "walking", "route": {{"distance_m": -5000, "duration_s": 60}}}}]"#
        )
        .unwrap();

        let err = MockDirectionsClient::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, DirectionsError::NotConfigured(_)));
        assert!(err.to_string().contains("distance_m"), "{err}");
    }

    #[test]
    fn fixture_rejects_negative_traffic_duration() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"mode": "driving", "route": {{"distance_m": 5000, "duration_s": 600,
                "duration_in_traffic_s": -1}}}}]"#
        )
        .unwrap();

        assert!(matches!(
            MockDirectionsClient::from_json_file(file.path()),
            Err(DirectionsError::NotConfigured(_))
        ));
    }

    #[test]
    fn fixture_rejects_out_of_range_bounds() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"mode": "walking", "route": {{"distance_m": 5000, "duration_s": 60,
                "bounds": {{"southwest": {{"lat": 999, "lng": 0}},
                            "northeast": {{"lat": 1, "lng": 1}}}}}}}}]"#
        )
        .unwrap();

        assert!(matches!(
            MockDirectionsClient::from_json_file(file.path()),
            Err(DirectionsError::Json { .. })
        ));
    }

    #[test]
    fn fixture_entry_needs_exactly_one_outcome() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"mode": "walking"}}]"#).unwrap();

        assert!(matches!(
            MockDirectionsClient::from_json_file(file.path()),
            Err(DirectionsError::NotConfigured(_))
        ));
    }

    #[test]
    fn missing_fixture_file() {
        assert!(MockDirectionsClient::from_json_file("does/not/exist.json").is_err());
    }
}

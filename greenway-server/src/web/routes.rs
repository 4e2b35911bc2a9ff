//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::services::ServeDir;

use crate::domain::{InvalidCoordinate, LatLng, RouteQuery};
use crate::planner::Aggregator;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory, served for any
/// path no API route claims.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/routes", get(compare_routes))
        .route("/api/modes", get(list_modes))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List the modes a comparison covers.
async fn list_modes(State(state): State<AppState>) -> Json<Vec<ModeDto>> {
    Json(state.catalog.iter().map(ModeDto::from_descriptor).collect())
}

/// Compare every mode between two points.
///
/// Modes that fail are left out and listed as unavailable; a query where
/// every mode fails still answers 200 with no routes.
async fn compare_routes(
    State(state): State<AppState>,
    Query(req): Query<RoutesQuery>,
) -> Result<Json<CompareResponse>, AppError> {
    let query = parse_query(&req)?;

    let aggregator = Aggregator::new(&*state.directions, &state.catalog, &state.config);
    let comparison = aggregator.compare(&query).await;

    Ok(Json(CompareResponse::from_comparison(&comparison)))
}

/// Validate request parameters into a route query.
fn parse_query(req: &RoutesQuery) -> Result<RouteQuery, AppError> {
    let (Some(origin), Some(destination)) = (
        req.origin.as_deref().filter(|s| !s.trim().is_empty()),
        req.destination.as_deref().filter(|s| !s.trim().is_empty()),
    ) else {
        return Err(AppError::BadRequest {
            message: "Missing origin/destination parameters".to_string(),
        });
    };

    let origin = parse_point("origin", origin)?;
    let destination = parse_point("destination", destination)?;
    let mut query = RouteQuery::new(origin, destination);

    if let Some(raw) = req.departure_time.as_deref().filter(|s| !s.is_empty()) {
        let secs = raw.trim().parse::<i64>().map_err(|_| AppError::BadRequest {
            message: format!("Invalid departure_time: {raw}"),
        })?;
        query = query.with_departure_time(secs);
    }

    Ok(query)
}

fn parse_point(name: &str, raw: &str) -> Result<LatLng, AppError> {
    raw.parse().map_err(|e: InvalidCoordinate| AppError::BadRequest {
        message: format!("Invalid {name}: {e}"),
    })
}

/// Application error type.
///
/// Provider failures never reach here; they drop the affected modes.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        tracing::debug!(%status, %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ModeCatalog;
    use crate::directions::{DirectionsBackend, MockDirectionsClient, ProviderRoute};
    use crate::domain::ProviderMode;
    use crate::planner::CompareConfig;

    fn req(origin: Option<&str>, destination: Option<&str>) -> RoutesQuery {
        RoutesQuery {
            origin: origin.map(str::to_string),
            destination: destination.map(str::to_string),
            departure_time: None,
        }
    }

    fn message(err: AppError) -> String {
        let AppError::BadRequest { message } = err;
        message
    }

    fn state(mock: MockDirectionsClient) -> AppState {
        AppState::new(
            DirectionsBackend::Mock(mock),
            ModeCatalog::default(),
            CompareConfig::default(),
        )
    }

    #[test]
    fn parses_valid_query() {
        let mut r = req(Some("42.3601,-71.0589"), Some(" 42.3736 , -71.1097 "));
        r.departure_time = Some("1700000000".to_string());

        let query = parse_query(&r).unwrap();
        assert_eq!(query.origin, LatLng::new(42.3601, -71.0589).unwrap());
        assert_eq!(query.destination, LatLng::new(42.3736, -71.1097).unwrap());
        assert_eq!(query.departure_time, Some(1_700_000_000));
    }

    #[test]
    fn missing_parameters_rejected() {
        for r in [
            req(None, Some("1,2")),
            req(Some("1,2"), None),
            req(Some(""), Some("1,2")),
            RoutesQuery::default(),
        ] {
            assert_eq!(
                message(parse_query(&r).unwrap_err()),
                "Missing origin/destination parameters"
            );
        }
    }

    #[test]
    fn malformed_coordinates_rejected() {
        let msg = message(parse_query(&req(Some("91,0"), Some("1,2"))).unwrap_err());
        assert!(msg.starts_with("Invalid origin"), "{msg}");

        let msg = message(parse_query(&req(Some("1,2"), Some("somewhere"))).unwrap_err());
        assert!(msg.starts_with("Invalid destination"), "{msg}");
    }

    #[test]
    fn malformed_departure_time_rejected() {
        let mut r = req(Some("1,2"), Some("3,4"));
        r.departure_time = Some("soon".to_string());
        assert_eq!(
            message(parse_query(&r).unwrap_err()),
            "Invalid departure_time: soon"
        );
    }

    #[tokio::test]
    async fn bad_request_makes_no_provider_call() {
        let mock = MockDirectionsClient::new();
        let result = compare_routes(
            State(state(mock.clone())),
            Query(req(None, Some("1,2"))),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn all_modes_failing_is_not_an_error() {
        let Json(response) = compare_routes(
            State(state(MockDirectionsClient::new())),
            Query(req(Some("1,2"), Some("3,4"))),
        )
        .await
        .unwrap();

        assert!(response.routes.is_empty());
        assert!(response.suggestion.is_none());
        assert_eq!(response.unavailable.len(), 8);
    }

    #[tokio::test]
    async fn compares_with_mock_backend() {
        let mock = MockDirectionsClient::new().with_route(
            ProviderMode::Walking,
            None,
            ProviderRoute {
                distance_m: 1200.0,
                duration_s: 900.0,
                duration_in_traffic_s: None,
                polyline: None,
                bounds: None,
            },
        );

        let Json(response) = compare_routes(
            State(state(mock)),
            Query(req(Some("1,2"), Some("3,4"))),
        )
        .await
        .unwrap();

        assert_eq!(response.routes.len(), 1);
        assert_eq!(response.routes[0].mode, "walking");
        assert_eq!(response.routes[0].duration_min, 15.0);
        assert_eq!(response.unavailable.len(), 7);
    }

    #[tokio::test]
    async fn lists_catalog_modes() {
        let Json(modes) = list_modes(State(state(MockDirectionsClient::new()))).await;
        assert_eq!(modes.len(), 8);
        assert_eq!(modes[0].id, "driving");
    }

    #[test]
    fn bad_request_status() {
        let bad = AppError::BadRequest {
            message: "nope".to_string(),
        }
        .into_response();
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
    }
}

use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use greenway_server::catalog::ModeCatalog;
use greenway_server::directions::{
    DirectionsBackend, DirectionsClient, DirectionsConfig, MockDirectionsClient,
};
use greenway_server::planner::CompareConfig;
use greenway_server::web::{AppState, create_router};

/// Per-lookup timeout when `DIRECTIONS_TIMEOUT_SECS` is unset.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

const DEFAULT_PORT: u16 = 8080;

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{name}={raw} is not valid, using default");
            default
        }),
        Err(_) => default,
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let timeout_secs = env_or("DIRECTIONS_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);
    let port = env_or("PORT", DEFAULT_PORT);
    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string());

    // Mode catalog: built-in table unless a JSON override is given
    let catalog = match std::env::var("MODE_CATALOG") {
        Ok(path) => {
            let catalog = ModeCatalog::from_json_file(&path).expect("Failed to load mode catalog");
            info!(%path, modes = catalog.len(), "loaded mode catalog");
            catalog
        }
        Err(_) => ModeCatalog::default(),
    };

    // Directions provider: fixture-backed mock for offline work, else live API
    let directions = match std::env::var("DIRECTIONS_MOCK_FILE") {
        Ok(path) => {
            info!(%path, "using mock directions");
            DirectionsBackend::Mock(
                MockDirectionsClient::from_json_file(&path)
                    .expect("Failed to load mock directions"),
            )
        }
        Err(_) => {
            let api_key = std::env::var("GOOGLE_API_KEY").unwrap_or_else(|_| {
                warn!("GOOGLE_API_KEY not set. Directions lookups will fail.");
                String::new()
            });
            let config = DirectionsConfig::new(api_key).with_timeout(timeout_secs);
            DirectionsBackend::Live(
                DirectionsClient::new(config).expect("Failed to create directions client"),
            )
        }
    };

    let compare_config = CompareConfig::default().with_call_timeout_secs(timeout_secs);

    let state = AppState::new(directions, catalog, compare_config);
    let app = create_router(state, &static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Greenway listening on http://{addr}");
    info!("  GET  /health       - Health check");
    info!("  GET  /api/routes   - Compare modes (origin, destination, departure_time)");
    info!("  GET  /api/modes    - List compared modes");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server error");
}

//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::ModeCatalog;
use crate::directions::DirectionsBackend;
use crate::planner::CompareConfig;

/// Shared application state.
///
/// Everything a request needs to run a comparison. Nothing here is mutated
/// after startup, so results are never shared across queries.
#[derive(Clone)]
pub struct AppState {
    /// Directions provider (live API or mock)
    pub directions: Arc<DirectionsBackend>,

    /// Modes to compare
    pub catalog: Arc<ModeCatalog>,

    /// Comparison configuration
    pub config: Arc<CompareConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(directions: DirectionsBackend, catalog: ModeCatalog, config: CompareConfig) -> Self {
        Self {
            directions: Arc::new(directions),
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}

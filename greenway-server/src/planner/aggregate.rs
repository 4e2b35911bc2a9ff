//! Route aggregation.
//!
//! Resolves the mode catalog into provider lookups, runs them concurrently,
//! and derives one route result per catalog entry from the lookups that
//! succeeded.

use std::collections::HashMap;

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::catalog::{ModeCatalog, ModeDescriptor};
use crate::directions::{DirectionsError, DirectionsProvider, ProviderRequest, ProviderRoute};
use crate::domain::{ModeId, ProviderMode, RouteQuery, RouteResult, TransitVehicle};

use super::config::CompareConfig;
use super::rank::rank_routes;
use super::suggest::{Suggestion, suggest_alternative};

type LookupKey = (ProviderMode, Option<TransitVehicle>);

/// Result of comparing every catalog mode for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// One result per mode that has a route, in catalog order.
    pub routes: Vec<RouteResult>,

    /// Greener alternative to the fastest mode, if one qualifies.
    pub suggestion: Option<Suggestion>,

    /// Modes whose lookup failed or found nothing, in catalog order.
    pub unavailable: Vec<ModeId>,
}

impl Comparison {
    /// Routes in presentation order (lowest carbon first).
    pub fn ranked(&self) -> Vec<RouteResult> {
        rank_routes(self.routes.clone())
    }

    pub fn route(&self, mode: &ModeId) -> Option<&RouteResult> {
        self.routes.iter().find(|r| &r.mode == mode)
    }

    /// True when some modes are missing but others are shown.
    pub fn is_partial(&self) -> bool {
        !self.routes.is_empty() && !self.unavailable.is_empty()
    }
}

/// Build the route result for one catalog entry from its provider lookup.
///
/// Distance is converted to km, durations to minutes scaled by the entry's
/// multiplier, and carbon is `distance_km * emissions_factor`. Traffic-aware
/// duration is kept only for driving-like provider modes.
pub fn derive_route(descriptor: &ModeDescriptor, route: &ProviderRoute) -> RouteResult {
    let distance_km = route.distance_m / 1000.0;
    let multiplier = descriptor.duration_multiplier;

    let duration_with_traffic_min = route
        .duration_in_traffic_s
        .filter(|_| descriptor.provider_mode.is_driving_like())
        .map(|secs| (secs / 60.0) * multiplier);

    RouteResult {
        mode: descriptor.id.clone(),
        distance_km,
        duration_min: (route.duration_s / 60.0) * multiplier,
        duration_with_traffic_min,
        carbon_kg: distance_km * descriptor.emissions_factor_kg_per_km,
        polyline: route.polyline.clone().unwrap_or_default(),
        bounds: route.bounds,
    }
}

/// Compares travel modes for a query.
pub struct Aggregator<'a, P> {
    provider: &'a P,
    catalog: &'a ModeCatalog,
    config: &'a CompareConfig,
}

impl<'a, P: DirectionsProvider> Aggregator<'a, P> {
    /// Create a new aggregator.
    pub fn new(provider: &'a P, catalog: &'a ModeCatalog, config: &'a CompareConfig) -> Self {
        Self {
            provider,
            catalog,
            config,
        }
    }

    /// Compare every catalog mode, using the current time as the default
    /// departure for traffic-aware lookups.
    pub async fn compare(&self, query: &RouteQuery) -> Comparison {
        self.compare_at(query, chrono::Utc::now().timestamp()).await
    }

    /// Compare every catalog mode with `now` (epoch seconds) as the default
    /// departure time.
    ///
    /// Catalog entries resolving to the same provider lookup share one call.
    /// A failed or timed-out lookup drops its modes; it never fails the
    /// comparison, which may therefore come back empty.
    pub async fn compare_at(&self, query: &RouteQuery, now: i64) -> Comparison {
        let mut keys: Vec<LookupKey> = Vec::new();
        for descriptor in self.catalog.iter() {
            let key = descriptor.lookup_key();
            if !keys.contains(&key) {
                keys.push(key);
            }
        }

        let lookups = keys.iter().map(|&(mode, vehicle)| {
            let request = ProviderRequest::for_query(query, mode, vehicle, now);
            async move { ((mode, vehicle), self.lookup(&request).await) }
        });
        let outcomes = join_all(lookups).await;

        let mut found: HashMap<LookupKey, ProviderRoute> = HashMap::new();
        for ((mode, vehicle), outcome) in outcomes {
            match outcome {
                Ok(route) => {
                    found.insert((mode, vehicle), route);
                }
                Err(e) => {
                    warn!(%mode, ?vehicle, error = %e, "directions lookup failed, dropping mode");
                }
            }
        }

        let mut routes = Vec::with_capacity(self.catalog.len());
        let mut unavailable = Vec::new();
        for descriptor in self.catalog.iter() {
            match found.get(&descriptor.lookup_key()) {
                Some(route) => routes.push(derive_route(descriptor, route)),
                None => unavailable.push(descriptor.id.clone()),
            }
        }

        let suggestion = suggest_alternative(&routes, &self.config.suggestion);

        info!(
            lookups = keys.len(),
            routes = routes.len(),
            unavailable = unavailable.len(),
            suggestion = suggestion.as_ref().map(|s| s.mode.as_str()),
            "comparison complete"
        );

        Comparison {
            routes,
            suggestion,
            unavailable,
        }
    }

    /// One provider lookup bounded by the configured timeout.
    async fn lookup(&self, request: &ProviderRequest) -> Result<ProviderRoute, DirectionsError> {
        debug!(mode = %request.mode, vehicle = ?request.transit_vehicle, "starting lookup");

        match tokio::time::timeout(self.config.call_timeout(), self.provider.route(request)).await
        {
            Ok(outcome) => outcome,
            Err(_) => Err(DirectionsError::Timeout {
                millis: self.config.call_timeout_ms,
            }),
        }
    }
}

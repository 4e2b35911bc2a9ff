//! Route ranking for presentation.
//!
//! Orders routes so the lowest-emission options come first.

use std::cmp::Ordering;

use crate::domain::RouteResult;

/// Rank routes by preference.
///
/// Routes are ranked by:
/// 1. Carbon emitted (lower is better)
/// 2. Duration without traffic (shorter is better)
///
/// The sort is stable, so routes equal on both keys keep their input order.
pub fn rank_routes(mut routes: Vec<RouteResult>) -> Vec<RouteResult> {
    routes.sort_by(|a, b| {
        a.carbon_kg
            .total_cmp(&b.carbon_kg)
            .then_with(|| a.duration_min.total_cmp(&b.duration_min))
    });
    routes
}

/// The route with the smallest duration, first one wins on ties.
pub fn fastest_route(routes: &[RouteResult]) -> Option<&RouteResult> {
    routes.iter().reduce(|best, r| {
        if r.duration_min.total_cmp(&best.duration_min) == Ordering::Less {
            r
        } else {
            best
        }
    })
}

/// Relative difference of `duration` from `base`: `|duration - base| / base`.
///
/// A zero `base` gives 0 for an equal duration and infinity otherwise.
pub fn relative_time_diff(duration: f64, base: f64) -> f64 {
    let diff = (duration - base).abs();
    if base > 0.0 {
        diff / base
    } else if diff == 0.0 {
        0.0
    } else {
        f64::INFINITY
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::ModeId;
    use proptest::prelude::*;

    const MODES: [&str; 8] = [
        "driving",
        "bus",
        "tram",
        "subway",
        "walking",
        "bicycling",
        "e-bike",
        "e-scooter",
    ];

    /// Routes with coarse carbon/duration values so ties actually occur.
    fn routes_strategy() -> impl Strategy<Value = Vec<RouteResult>> {
        prop::collection::vec((0usize..8, 0u32..6, 1u32..12), 0..8).prop_map(|raw| {
            raw.into_iter()
                .map(|(m, carbon, duration)| RouteResult {
                    mode: ModeId::parse(MODES[m]).unwrap(),
                    distance_km: 5.0,
                    duration_min: f64::from(duration) * 5.0,
                    duration_with_traffic_min: None,
                    carbon_kg: f64::from(carbon) * 0.25,
                    polyline: String::new(),
                    bounds: None,
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn rank_routes_is_sorted(routes in routes_strategy()) {
            let ranked = rank_routes(routes);

            for window in ranked.windows(2) {
                let (a, b) = (&window[0], &window[1]);
                prop_assert!(a.carbon_kg <= b.carbon_kg);
                if a.carbon_kg == b.carbon_kg {
                    prop_assert!(
                        a.duration_min <= b.duration_min,
                        "{:?} should come before {:?}",
                        (a.carbon_kg, a.duration_min),
                        (b.carbon_kg, b.duration_min)
                    );
                }
            }
        }

        #[test]
        fn rank_routes_preserves_elements(routes in routes_strategy()) {
            let original_len = routes.len();
            let ranked = rank_routes(routes);
            prop_assert_eq!(ranked.len(), original_len);
        }

        #[test]
        fn fastest_is_minimal(routes in routes_strategy()) {
            match fastest_route(&routes) {
                None => prop_assert!(routes.is_empty()),
                Some(fastest) => {
                    for r in &routes {
                        prop_assert!(fastest.duration_min <= r.duration_min);
                    }
                }
            }
        }
    }
}

//! Green-alternative suggestion.
//!
//! Compares every route against the fastest one and, when a lower-emission
//! mode gets there in about the same time, produces a single suggestion.
//! Pure and deterministic: the same routes always give the same answer.

use crate::domain::{ModeId, RouteResult};

use super::rank::{fastest_route, relative_time_diff};

/// Thresholds for the two suggestion rules.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionThresholds {
    /// Largest relative time difference from the fastest route for the
    /// near-time rule.
    pub near_time: f64,

    /// Largest duration, as a multiple of the fastest duration, for the
    /// near-fastest fallback rule.
    pub near_fastest: f64,
}

impl SuggestionThresholds {
    pub fn new(near_time: f64, near_fastest: f64) -> Self {
        Self {
            near_time,
            near_fastest,
        }
    }
}

impl Default for SuggestionThresholds {
    fn default() -> Self {
        Self {
            near_time: 0.15,
            near_fastest: 1.10,
        }
    }
}

/// Which rule produced a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionRule {
    /// Closest-in-time lower-emission mode.
    NearTime,
    /// First lower-emission mode within the near-fastest factor.
    NearFastest,
}

/// A recommendation to take a lower-emission mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub message: String,

    /// The suggested mode.
    pub mode: ModeId,

    /// The fastest mode it was compared against.
    pub compared_to: ModeId,

    /// Carbon saved against `compared_to`, always positive.
    pub carbon_saved_kg: f64,

    pub rule: SuggestionRule,
}

/// Decide whether a greener alternative to the fastest route applies.
///
/// Returns `None` for fewer than two routes or when no route satisfies
/// either rule. The near-time rule wins over the near-fastest rule.
pub fn suggest_alternative(
    routes: &[RouteResult],
    thresholds: &SuggestionThresholds,
) -> Option<Suggestion> {
    if routes.len() <= 1 {
        return None;
    }

    let fastest = fastest_route(routes)?;
    let greener = || {
        routes
            .iter()
            .filter(move |r| !std::ptr::eq(*r, fastest) && r.carbon_kg < fastest.carbon_kg)
    };

    // Near-time: smallest relative difference, first one on ties.
    let mut near_time: Option<(&RouteResult, f64)> = None;
    for candidate in greener() {
        let diff = relative_time_diff(candidate.duration_min, fastest.duration_min);
        if diff > thresholds.near_time {
            continue;
        }
        if near_time.is_none_or(|(_, best)| diff < best) {
            near_time = Some((candidate, diff));
        }
    }

    if let Some((candidate, _)) = near_time {
        let saved = fastest.carbon_kg - candidate.carbon_kg;
        return Some(Suggestion {
            message: format!(
                "You could save {saved:.2} kg of CO₂ by taking {} — it'll get you there in about the same time as {}.",
                candidate.mode, fastest.mode
            ),
            mode: candidate.mode.clone(),
            compared_to: fastest.mode.clone(),
            carbon_saved_kg: saved,
            rule: SuggestionRule::NearTime,
        });
    }

    let limit = fastest.duration_min * thresholds.near_fastest;
    let candidate = greener().find(|r| r.duration_min <= limit)?;
    let saved = fastest.carbon_kg - candidate.carbon_kg;

    Some(Suggestion {
        message: format!(
            "You could arrive in nearly the same time using {}, saving {saved:.2} kg of CO₂.",
            candidate.mode
        ),
        mode: candidate.mode.clone(),
        compared_to: fastest.mode.clone(),
        carbon_saved_kg: saved,
        rule: SuggestionRule::NearFastest,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
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

    /// Up to eight routes with distinct modes and coarse values.
    fn routes_strategy() -> impl Strategy<Value = Vec<RouteResult>> {
        prop::collection::vec((0u32..10, 1u32..40), 0..=8).prop_map(|raw| {
            raw.into_iter()
                .enumerate()
                .map(|(i, (carbon, duration))| RouteResult {
                    mode: ModeId::parse(MODES[i]).unwrap(),
                    distance_km: 10.0,
                    duration_min: f64::from(duration),
                    duration_with_traffic_min: None,
                    carbon_kg: f64::from(carbon) * 0.2,
                    polyline: String::new(),
                    bounds: None,
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn none_for_at_most_one_route(routes in routes_strategy()) {
            let routes: Vec<_> = routes.into_iter().take(1).collect();
            prop_assert!(suggest_alternative(&routes, &SuggestionThresholds::default()).is_none());
        }

        #[test]
        fn suggestion_is_strictly_greener(routes in routes_strategy()) {
            if let Some(s) = suggest_alternative(&routes, &SuggestionThresholds::default()) {
                let find = |mode: &ModeId| routes.iter().find(|r| &r.mode == mode).unwrap();
                let suggested = find(&s.mode);
                let compared = find(&s.compared_to);

                prop_assert!(suggested.carbon_kg < compared.carbon_kg);
                prop_assert!(s.carbon_saved_kg > 0.0);
                prop_assert_ne!(&s.mode, &s.compared_to);
            }
        }

        #[test]
        fn suggestion_is_time_competitive(routes in routes_strategy()) {
            let thresholds = SuggestionThresholds::default();
            if let Some(s) = suggest_alternative(&routes, &thresholds) {
                let suggested = routes.iter().find(|r| r.mode == s.mode).unwrap();
                let fastest = fastest_route(&routes).unwrap();
                prop_assert_eq!(&fastest.mode, &s.compared_to);
                prop_assert!(
                    relative_time_diff(suggested.duration_min, fastest.duration_min)
                        <= thresholds.near_time.max(thresholds.near_fastest - 1.0)
                );
            }
        }

        #[test]
        fn suggestion_is_idempotent(routes in routes_strategy()) {
            let thresholds = SuggestionThresholds::default();
            let first = suggest_alternative(&routes, &thresholds);
            let second = suggest_alternative(&routes, &thresholds);
            prop_assert_eq!(first, second);
        }
    }
}

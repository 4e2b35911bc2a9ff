//! When selecting a mode should be interrupted by a greener alternative.

use crate::domain::{ModeId, RouteResult};
use crate::planner::relative_time_diff;

/// Thresholds for the pre-selection confirmation prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationPolicy {
    /// How many of the highest-emitting routes trigger a prompt.
    pub top_n: usize,

    /// The selected route must emit strictly more than this (kg CO₂).
    pub min_carbon_kg: f64,

    /// Largest relative time difference an alternative may have.
    pub max_time_diff: f64,
}

impl ConfirmationPolicy {
    pub fn new(top_n: usize, min_carbon_kg: f64, max_time_diff: f64) -> Self {
        Self {
            top_n,
            min_carbon_kg,
            max_time_diff,
        }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_max_time_diff(mut self, max_time_diff: f64) -> Self {
        self.max_time_diff = max_time_diff;
        self
    }
}

impl Default for ConfirmationPolicy {
    fn default() -> Self {
        Self {
            top_n: 3,
            min_carbon_kg: 0.05,
            max_time_diff: 0.30,
        }
    }
}

/// The alternative offered before committing to a high-emission mode.
#[derive(Debug, Clone, PartialEq)]
pub struct GreenAlternative {
    pub mode: ModeId,
    pub carbon_saved_kg: f64,
    pub message: String,
}

/// Whether `selected` is among the `top_n` highest emitters of `routes`.
///
/// Ties keep their original order.
fn is_top_emitter(routes: &[RouteResult], selected: &ModeId, top_n: usize) -> bool {
    let mut by_carbon: Vec<&RouteResult> = routes.iter().collect();
    by_carbon.sort_by(|a, b| b.carbon_kg.total_cmp(&a.carbon_kg));
    by_carbon.iter().take(top_n).any(|r| &r.mode == selected)
}

/// Find the alternative to prompt with when `selected` is picked, if any.
pub fn green_alternative(
    routes: &[RouteResult],
    selected: &RouteResult,
    policy: &ConfirmationPolicy,
) -> Option<GreenAlternative> {
    if selected.carbon_kg <= policy.min_carbon_kg
        || !is_top_emitter(routes, &selected.mode, policy.top_n)
    {
        return None;
    }

    let best = routes
        .iter()
        .filter(|r| r.mode != selected.mode)
        .filter(|r| r.carbon_kg < selected.carbon_kg)
        .filter(|r| relative_time_diff(r.duration_min, selected.duration_min) <= policy.max_time_diff)
        .min_by(|a, b| a.carbon_kg.total_cmp(&b.carbon_kg))?;

    let saved = selected.carbon_kg - best.carbon_kg;
    Some(GreenAlternative {
        mode: best.mode.clone(),
        carbon_saved_kg: saved,
        message: format!(
            "You could save {saved:.2} kg of CO₂ by taking {} — it'll get you there in about the same time!",
            best.mode
        ),
    })
}

//! Comparison configuration.

use std::time::Duration;

use super::suggest::SuggestionThresholds;

/// Configuration parameters for a comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareConfig {
    /// Upper bound on a single provider lookup (milliseconds).
    /// A lookup that takes longer counts as a failure for its modes.
    pub call_timeout_ms: u64,

    /// Thresholds for the green-alternative suggestion.
    pub suggestion: SuggestionThresholds,
}

impl CompareConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(call_timeout_ms: u64, suggestion: SuggestionThresholds) -> Self {
        Self {
            call_timeout_ms,
            suggestion,
        }
    }

    /// Set the per-lookup timeout.
    pub fn with_call_timeout_ms(mut self, millis: u64) -> Self {
        self.call_timeout_ms = millis;
        self
    }

    /// Set the per-lookup timeout in whole seconds, saturating on overflow.
    pub fn with_call_timeout_secs(self, secs: u64) -> Self {
        self.with_call_timeout_ms(secs.saturating_mul(1000))
    }

    /// Returns the per-lookup timeout as a Duration.
    pub fn call_timeout(&self) -> Duration {
        Duration::from_millis(self.call_timeout_ms)
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            call_timeout_ms: 10_000,
            suggestion: SuggestionThresholds::default(),
        }
    }
}

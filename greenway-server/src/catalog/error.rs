//! Mode catalog errors.

use crate::domain::ModeId;

/// Errors from building or loading a mode catalog.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("mode catalog is empty")]
    Empty,

    #[error("duplicate mode id: {0}")]
    DuplicateMode(ModeId),

    #[error("mode {mode}: emissions factor must be finite and non-negative, got {value}")]
    InvalidEmissionsFactor { mode: ModeId, value: f64 },

    #[error("mode {mode}: duration multiplier must be finite and at least 1, got {value}")]
    InvalidDurationMultiplier { mode: ModeId, value: f64 },

    #[error("mode {mode}: transit vehicle filter requires the transit provider mode")]
    VehicleWithoutTransit { mode: ModeId },

    #[error("failed to read catalog {path}: {message}")]
    Io { path: String, message: String },

    #[error("catalog JSON error: {message}")]
    Json { message: String },
}

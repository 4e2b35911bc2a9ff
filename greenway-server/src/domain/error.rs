//! Domain validation errors.

/// Error returned when a coordinate cannot be parsed or is out of range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidCoordinate {
    /// The input was not of the form `lat,lng`.
    #[error("expected \"lat,lng\", got {0:?}")]
    Format(String),

    /// A component was not a finite number.
    #[error("{component} is not a number: {value:?}")]
    NotANumber {
        component: &'static str,
        value: String,
    },

    /// Latitude outside [-90, 90].
    #[error("latitude {0} is out of range [-90, 90]")]
    LatitudeOutOfRange(f64),

    /// Longitude outside [-180, 180].
    #[error("longitude {0} is out of range [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// Error returned when parsing a mode identifier or provider mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid mode {value:?}: {reason}")]
pub struct InvalidMode {
    pub value: String,
    pub reason: &'static str,
}

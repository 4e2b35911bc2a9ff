//! Directions client error types.

use std::fmt;

/// Errors from one directions lookup.
///
/// Every variant is a per-mode failure: the aggregator drops the mode and
/// carries on with the others.
#[derive(Debug)]
pub enum DirectionsError {
    /// HTTP request failed (network error, connect timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// Provider answered with a non-OK status in the response body
    Status {
        status: String,
        message: Option<String>,
    },

    /// Provider found no route for this mode
    NoRoute,

    /// API returned an error status code
    Api { status: u16, message: String },

    /// Invalid API key or request denied
    Unauthorized,

    /// Rate limited by the API
    RateLimited,

    /// The lookup did not finish within the per-call limit
    Timeout { millis: u64 },

    /// Feature not configured or not available
    NotConfigured(String),
}

impl fmt::Display for DirectionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectionsError::Http(e) => write!(f, "HTTP error: {e}"),
            DirectionsError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            DirectionsError::Status { status, message } => {
                write!(f, "provider status {status}")?;
                if let Some(message) = message {
                    write!(f, ": {message}")?;
                }
                Ok(())
            }
            DirectionsError::NoRoute => write!(f, "no route found"),
            DirectionsError::Api { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            DirectionsError::Unauthorized => {
                write!(f, "unauthorized (invalid API key or request denied)")
            }
            DirectionsError::RateLimited => write!(f, "rate limited by directions API"),
            DirectionsError::Timeout { millis } => write!(f, "timed out after {millis}ms"),
            DirectionsError::NotConfigured(msg) => write!(f, "not configured: {msg}"),
        }
    }
}

impl std::error::Error for DirectionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DirectionsError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DirectionsError {
    fn from(err: reqwest::Error) -> Self {
        DirectionsError::Http(err)
    }
}

//! Core domain types for travel-mode comparison.
//!
//! These types are validated on construction where it matters (coordinates,
//! mode identifiers) and carry no provider- or transport-specific details.

mod coord;
mod error;
mod mode;
mod route;

pub use coord::{Bounds, LatLng};
pub use error::{InvalidCoordinate, InvalidMode};
pub use mode::{ModeId, ProviderMode, TransitVehicle};
pub use route::{RouteQuery, RouteResult};

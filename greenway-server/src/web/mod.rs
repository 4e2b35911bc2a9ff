//! Web layer for the route comparison server.
//!
//! Exposes the comparison over HTTP and serves the static front end.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;

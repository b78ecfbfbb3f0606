//! Routes for the parking workflow.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// `/parking` route tree: entry, exit, and spot availability.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/parking/entry", post(handlers::parking::entry))
        .route("/parking/exit", post(handlers::parking::exit))
        .route("/parking/spots", get(handlers::parking::spots))
}

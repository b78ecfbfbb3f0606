pub mod health;
pub mod parking;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /parking/entry    vehicle entry (POST)
/// /parking/exit     vehicle exit (POST)
/// /parking/spots    spot availability summary (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(parking::router())
}

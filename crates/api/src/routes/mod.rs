pub mod exercise;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /exercises        list, create (GET, POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/exercises", exercise::router())
}

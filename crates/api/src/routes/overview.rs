use axum::routing::get;
use axum::Router;

use crate::handlers::overview;
use crate::state::AppState;

/// `GET /overview` (requires the gateway's identity headers).
pub fn router() -> Router<AppState> {
    Router::new().route("/overview", get(overview::get_overview))
}

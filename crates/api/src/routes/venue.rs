//! Venue-scoped rating views mounted at `/venues`.
//!
//! Venues themselves live in an external collection; only their ratings
//! are served here.

use axum::routing::get;
use axum::Router;

use crate::handlers::rating;
use crate::state::AppState;

/// ```text
/// GET /{venue_id}/ratings         -> list_for_venue
/// GET /{venue_id}/rating-summary  -> summary_for_venue
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{venue_id}/ratings", get(rating::list_for_venue))
        .route("/{venue_id}/rating-summary", get(rating::summary_for_venue))
}

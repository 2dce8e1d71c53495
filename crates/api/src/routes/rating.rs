//! Route definitions for the `/ratings` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::rating;
use crate::state::AppState;

/// Routes mounted at `/ratings`.
///
/// ```text
/// GET    /        -> list (optional ?user_id=&venue_id=)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(rating::list).post(rating::create))
        .route(
            "/{id}",
            get(rating::get_by_id)
                .put(rating::update)
                .delete(rating::delete),
        )
}

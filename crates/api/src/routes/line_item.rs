//! Route definitions for the `/line-items` catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::line_item;
use crate::state::AppState;

/// Routes mounted at `/line-items`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(line_item::list).post(line_item::create))
        .route(
            "/{id}",
            get(line_item::get_by_id)
                .put(line_item::update)
                .delete(line_item::delete),
        )
}

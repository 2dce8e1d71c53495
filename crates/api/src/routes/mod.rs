pub mod client;
pub mod health;
pub mod line_item;
pub mod overview;
pub mod project;
pub mod rating;
pub mod venue;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /clients                                list, create
/// /clients/{id}                           get, update, delete
///
/// /projects                               list, create
/// /projects/{id}                          get, update, delete
/// /projects/{id}/line-items               resolve referenced line items
///
/// /line-items                             list, create
/// /line-items/{id}                        get, update, delete
///
/// /ratings                                list (?user_id, ?venue_id), create
/// /ratings/{id}                           get, update, delete
///
/// /venues/{venue_id}/ratings              ratings for one venue
/// /venues/{venue_id}/rating-summary       averages + star row
///
/// /overview                               greeting for the session user
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/clients", client::router())
        .nest("/projects", project::router())
        .nest("/line-items", line_item::router())
        .nest("/ratings", rating::router())
        .nest("/venues", venue::router())
        .merge(overview::router())
}

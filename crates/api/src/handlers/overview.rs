//! Handler for the dashboard overview greeting.

use axum::Json;
use venuebook_core::greeting::Overview;

use crate::error::AppResult;
use crate::middleware::session::Session;
use crate::response::DataResponse;

/// GET /api/v1/overview
///
/// Greets the signed-in user based on the server's local hour.
pub async fn get_overview(Session(user): Session) -> AppResult<Json<DataResponse<Overview>>> {
    let overview = Overview::mount_now(&user);
    Ok(Json(DataResponse { data: overview }))
}

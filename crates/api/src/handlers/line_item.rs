//! Handlers for the `/line-items` catalog.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use venuebook_core::error::CoreError;
use venuebook_core::types::DbId;
use venuebook_db::models::line_item::{CreateLineItem, LineItem, UpdateLineItem};
use venuebook_db::repositories::LineItemRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParam};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "LineItem",
        id,
    })
}

/// POST /api/v1/line-items
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateLineItem>,
) -> AppResult<(StatusCode, Json<LineItem>)> {
    let new_item = input.validated()?;
    let item = LineItemRepo::create(&state.pool, &new_item).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/v1/line-items
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<LineItem>>>> {
    let items = LineItemRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/line-items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<LineItem>> {
    let item = LineItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(item))
}

/// PUT /api/v1/line-items/{id}
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<UpdateLineItem>,
) -> AppResult<Json<LineItem>> {
    let input = input.validated()?;
    let item = LineItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(item))
}

/// DELETE /api/v1/line-items/{id}
///
/// Projects referencing the item keep the dangling id.
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<StatusCode> {
    if LineItemRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

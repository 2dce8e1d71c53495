//! Handlers for the `/ratings` resource and per-venue rating views.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use venuebook_core::error::CoreError;
use venuebook_core::rating::RatingSummary;
use venuebook_core::types::DbId;
use venuebook_db::models::rating::{CreateRating, Rating, RatingFilter, UpdateRating};
use venuebook_db::repositories::RatingRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParam, QueryParams};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Rating",
        id,
    })
}

/// POST /api/v1/ratings
///
/// A second rating for the same user and venue is rejected with 409.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateRating>,
) -> AppResult<(StatusCode, Json<Rating>)> {
    let new_rating = input.validated()?;
    let rating = RatingRepo::create(&state.pool, &new_rating).await?;

    tracing::info!(
        rating_id = rating.id,
        user_id = rating.user_id,
        venue_id = rating.venue_id,
        "Rating submitted"
    );
    Ok((StatusCode::CREATED, Json(rating)))
}

/// GET /api/v1/ratings?user_id=&venue_id=
pub async fn list(
    State(state): State<AppState>,
    QueryParams(filter): QueryParams<RatingFilter>,
) -> AppResult<Json<DataResponse<Vec<Rating>>>> {
    let ratings = RatingRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: ratings }))
}

/// GET /api/v1/ratings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Rating>> {
    let rating = RatingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(rating))
}

/// PUT /api/v1/ratings/{id}
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<UpdateRating>,
) -> AppResult<Json<Rating>> {
    let input = input.validated()?;
    let rating = RatingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(rating))
}

/// DELETE /api/v1/ratings/{id}
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<StatusCode> {
    if RatingRepo::delete(&state.pool, id).await? {
        tracing::info!(rating_id = id, "Rating deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// GET /api/v1/venues/{venue_id}/ratings
pub async fn list_for_venue(
    State(state): State<AppState>,
    PathParam(venue_id): PathParam<DbId>,
) -> AppResult<Json<DataResponse<Vec<Rating>>>> {
    let filter = RatingFilter {
        venue_id: Some(venue_id),
        ..Default::default()
    };
    let ratings = RatingRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: ratings }))
}

/// GET /api/v1/venues/{venue_id}/rating-summary
pub async fn summary_for_venue(
    State(state): State<AppState>,
    PathParam(venue_id): PathParam<DbId>,
) -> AppResult<Json<DataResponse<RatingSummary>>> {
    let summary = RatingRepo::summary_for_venue(&state.pool, venue_id).await?;
    Ok(Json(DataResponse { data: summary }))
}

//! Repository for the `ratings` table.

use sqlx::PgPool;
use venuebook_core::rating::RatingSummary;
use venuebook_core::types::DbId;

use crate::models::rating::{NewRating, Rating, RatingFilter, UpdateRating};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, service_rating, location_rating, review, user_id, venue_id, created_at, updated_at";

/// Provides CRUD operations and per-venue aggregation for ratings.
pub struct RatingRepo;

impl RatingRepo {
    /// Insert a validated rating, returning the created row.
    ///
    /// A second rating for the same `(user_id, venue_id)` fails with a
    /// unique violation on `uq_ratings_user_venue`.
    pub async fn create(pool: &PgPool, input: &NewRating) -> Result<Rating, sqlx::Error> {
        let query = format!(
            "INSERT INTO ratings (service_rating, location_rating, review, user_id, venue_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rating>(&query)
            .bind(input.service_rating)
            .bind(input.location_rating)
            .bind(&input.review)
            .bind(input.user_id)
            .bind(input.venue_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Rating>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ratings WHERE id = $1");
        sqlx::query_as::<_, Rating>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List ratings, newest first, optionally narrowed by user and/or venue.
    pub async fn list(pool: &PgPool, filter: &RatingFilter) -> Result<Vec<Rating>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ratings
             WHERE ($1::BIGINT IS NULL OR user_id = $1)
               AND ($2::BIGINT IS NULL OR venue_id = $2)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Rating>(&query)
            .bind(filter.user_id)
            .bind(filter.venue_id)
            .fetch_all(pool)
            .await
    }

    /// Update scores and review. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRating,
    ) -> Result<Option<Rating>, sqlx::Error> {
        let query = format!(
            "UPDATE ratings SET
                service_rating = COALESCE($2, service_rating),
                location_rating = COALESCE($3, location_rating),
                review = COALESCE($4, review)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rating>(&query)
            .bind(id)
            .bind(input.service_rating)
            .bind(input.location_rating)
            .bind(&input.review)
            .fetch_optional(pool)
            .await
    }

    /// Delete a rating by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ratings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Aggregate all ratings for a venue.
    pub async fn summary_for_venue(
        pool: &PgPool,
        venue_id: DbId,
    ) -> Result<RatingSummary, sqlx::Error> {
        let (count, avg_service, avg_location): (i64, Option<f64>, Option<f64>) = sqlx::query_as(
            "SELECT COUNT(*),
                    AVG(service_rating)::FLOAT8,
                    AVG(location_rating)::FLOAT8
             FROM ratings
             WHERE venue_id = $1",
        )
        .bind(venue_id)
        .fetch_one(pool)
        .await?;

        tracing::debug!(venue_id, count, "Computed venue rating summary");
        Ok(RatingSummary::from_averages(
            venue_id,
            count,
            avg_service,
            avg_location,
        ))
    }
}

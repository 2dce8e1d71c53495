//! Repository for the `line_items` table.

use sqlx::PgPool;
use venuebook_core::types::DbId;

use crate::models::line_item::{LineItem, NewLineItem, UpdateLineItem};

const COLUMNS: &str = "id, name, applicable_to, cost, description, created_at, updated_at";

/// Provides CRUD operations for the line item catalog.
pub struct LineItemRepo;

impl LineItemRepo {
    pub async fn create(pool: &PgPool, input: &NewLineItem) -> Result<LineItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO line_items (name, applicable_to, cost, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LineItem>(&query)
            .bind(&input.name)
            .bind(&input.applicable_to)
            .bind(input.cost)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<LineItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM line_items WHERE id = $1");
        sqlx::query_as::<_, LineItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the line items with the given ids. Unknown ids are skipped.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<LineItem>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM line_items WHERE id = ANY($1) ORDER BY name ASC");
        sqlx::query_as::<_, LineItem>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List the catalog ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<LineItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM line_items ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, LineItem>(&query).fetch_all(pool).await
    }

    /// Update a line item. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLineItem,
    ) -> Result<Option<LineItem>, sqlx::Error> {
        let query = format!(
            "UPDATE line_items SET
                name = COALESCE($2, name),
                applicable_to = COALESCE($3, applicable_to),
                cost = COALESCE($4, cost),
                description = COALESCE($5, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LineItem>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.applicable_to)
            .bind(input.cost)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a catalog entry. Projects still referencing it are not touched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM line_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

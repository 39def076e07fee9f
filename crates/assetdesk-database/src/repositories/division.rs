//! Management division repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use assetdesk_core::error::{AppError, ErrorKind};
use assetdesk_core::result::AppResult;
use assetdesk_core::types::pagination::{PageRequest, PageResponse};
use assetdesk_entity::division::{CreateDivision, Division, UpdateDivision};

/// Repository for management division CRUD operations.
#[derive(Debug, Clone)]
pub struct DivisionRepository {
    pool: PgPool,
}

impl DivisionRepository {
    /// Create a new division repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a division by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Division>> {
        sqlx::query_as::<_, Division>("SELECT * FROM divisions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find division by id", e)
            })
    }

    /// List all divisions with pagination.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Division>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM divisions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count divisions", e)
            })?;

        let divisions = sqlx::query_as::<_, Division>(
            "SELECT * FROM divisions ORDER BY name ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list divisions", e))?;

        Ok(PageResponse::new(
            divisions,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new division.
    pub async fn create(&self, data: &CreateDivision) -> AppResult<Division> {
        sqlx::query_as::<_, Division>(
            "INSERT INTO divisions (name, manager_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.manager_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("divisions_name_key") =>
            {
                AppError::conflict(format!("Division '{}' already exists", data.name))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create division", e),
        })
    }

    /// Apply a partial update to a division.
    pub async fn update(&self, id: Uuid, data: &UpdateDivision) -> AppResult<Division> {
        sqlx::query_as::<_, Division>(
            "UPDATE divisions SET \
                 name = COALESCE($2, name), \
                 manager_id = CASE WHEN $3 THEN $4 ELSE manager_id END, \
                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.manager_id.is_some())
        .bind(data.manager_id.flatten())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update division", e))?
        .ok_or_else(|| AppError::not_found(format!("Division {id} not found")))
    }

    /// Set or clear the designated division manager.
    pub async fn set_manager(&self, id: Uuid, manager_id: Option<Uuid>) -> AppResult<Division> {
        sqlx::query_as::<_, Division>(
            "UPDATE divisions SET manager_id = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(manager_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to set division manager", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Division {id} not found")))
    }

    /// Delete a division by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM divisions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete division", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}

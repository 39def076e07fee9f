//! Department repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use assetdesk_core::error::{AppError, ErrorKind};
use assetdesk_core::result::AppResult;
use assetdesk_core::types::pagination::{PageRequest, PageResponse};
use assetdesk_entity::department::{CreateDepartment, Department, UpdateDepartment};

/// Repository for department CRUD operations.
#[derive(Debug, Clone)]
pub struct DepartmentRepository {
    pool: PgPool,
}

impl DepartmentRepository {
    /// Create a new department repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a department by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Department>> {
        sqlx::query_as::<_, Department>("SELECT * FROM departments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find department by id", e)
            })
    }

    /// List all departments with pagination.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Department>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM departments")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count departments", e)
            })?;

        let departments = sqlx::query_as::<_, Department>(
            "SELECT * FROM departments ORDER BY name ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list departments", e))?;

        Ok(PageResponse::new(
            departments,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new department.
    pub async fn create(&self, data: &CreateDepartment) -> AppResult<Department> {
        sqlx::query_as::<_, Department>(
            "INSERT INTO departments (name, division_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.division_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("departments_name_key") =>
            {
                AppError::conflict(format!("Department '{}' already exists", data.name))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create department", e),
        })
    }

    /// Apply a partial update to a department.
    pub async fn update(&self, id: Uuid, data: &UpdateDepartment) -> AppResult<Department> {
        sqlx::query_as::<_, Department>(
            "UPDATE departments SET \
                 name = COALESCE($2, name), \
                 division_id = CASE WHEN $3 THEN $4 ELSE division_id END, \
                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.division_id.is_some())
        .bind(data.division_id.flatten())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update department", e))?
        .ok_or_else(|| AppError::not_found(format!("Department {id} not found")))
    }

    /// Delete a department by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete department", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}

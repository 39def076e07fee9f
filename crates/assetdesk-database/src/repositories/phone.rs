//! Phone line repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use assetdesk_core::error::{AppError, ErrorKind};
use assetdesk_core::result::AppResult;
use assetdesk_core::types::pagination::{PageRequest, PageResponse};
use assetdesk_entity::phone::{AssignPhoneLine, CreatePhoneLine, PhoneLine, UpdatePhoneLine};

/// Repository for phone line CRUD and assignment operations.
#[derive(Debug, Clone)]
pub struct PhoneLineRepository {
    pool: PgPool,
}

impl PhoneLineRepository {
    /// Create a new phone line repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a phone line by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<PhoneLine>> {
        sqlx::query_as::<_, PhoneLine>("SELECT * FROM phone_lines WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find phone line by id", e)
            })
    }

    /// List all phone lines with pagination.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<PhoneLine>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM phone_lines")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count phone lines", e)
            })?;

        let lines = sqlx::query_as::<_, PhoneLine>(
            "SELECT * FROM phone_lines ORDER BY number ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list phone lines", e))?;

        Ok(PageResponse::new(
            lines,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List phone lines assigned to an employee.
    pub async fn find_by_assignee(&self, employee_id: Uuid) -> AppResult<Vec<PhoneLine>> {
        sqlx::query_as::<_, PhoneLine>(
            "SELECT * FROM phone_lines WHERE assigned_to = $1 ORDER BY number ASC",
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list assigned phone lines", e)
        })
    }

    /// Register a new phone line.
    pub async fn create(&self, data: &CreatePhoneLine) -> AppResult<PhoneLine> {
        sqlx::query_as::<_, PhoneLine>(
            "INSERT INTO phone_lines (number, carrier) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.number)
        .bind(&data.carrier)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("phone_lines_number_key") =>
            {
                AppError::conflict(format!("Number '{}' is already registered", data.number))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create phone line", e),
        })
    }

    /// Apply a partial update to a phone line.
    pub async fn update(&self, id: Uuid, data: &UpdatePhoneLine) -> AppResult<PhoneLine> {
        sqlx::query_as::<_, PhoneLine>(
            "UPDATE phone_lines SET \
                 number = COALESCE($2, number), \
                 carrier = COALESCE($3, carrier), \
                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.number)
        .bind(&data.carrier)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update phone line", e))?
        .ok_or_else(|| AppError::not_found(format!("Phone line {id} not found")))
    }

    /// Change a phone line's assignment and recorded approver.
    pub async fn set_assignment(&self, id: Uuid, data: &AssignPhoneLine) -> AppResult<PhoneLine> {
        sqlx::query_as::<_, PhoneLine>(
            "UPDATE phone_lines SET assigned_to = $2, approved_by = $3, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.assigned_to)
        .bind(data.approved_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to assign phone line", e))?
        .ok_or_else(|| AppError::not_found(format!("Phone line {id} not found")))
    }

    /// Delete a phone line by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM phone_lines WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete phone line", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}

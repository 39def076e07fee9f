//! Employee repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use assetdesk_core::error::{AppError, ErrorKind};
use assetdesk_core::result::AppResult;
use assetdesk_core::types::pagination::{PageRequest, PageResponse};
use assetdesk_entity::employee::{CreateEmployee, Employee, UpdateEmployee};

/// Repository for employee CRUD and query operations.
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    /// Create a new employee repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an employee by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>> {
        sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find employee by id", e)
            })
    }

    /// List all employees with pagination.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Employee>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count employees", e)
            })?;

        let employees = sqlx::query_as::<_, Employee>(
            "SELECT * FROM employees ORDER BY last_name ASC, first_name ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list employees", e))?;

        Ok(PageResponse::new(
            employees,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List employees belonging to a department.
    pub async fn find_by_department(&self, department_id: Uuid) -> AppResult<Vec<Employee>> {
        sqlx::query_as::<_, Employee>(
            "SELECT * FROM employees WHERE department_id = $1 ORDER BY last_name ASC",
        )
        .bind(department_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list department employees", e)
        })
    }

    /// Create a new employee.
    pub async fn create(&self, data: &CreateEmployee) -> AppResult<Employee> {
        sqlx::query_as::<_, Employee>(
            "INSERT INTO employees (first_name, last_name, title, is_manager, department_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.title)
        .bind(data.is_manager)
        .bind(data.department_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create employee", e))
    }

    /// Apply a partial update to an employee.
    ///
    /// The double-`Option` fields distinguish "leave unchanged" from
    /// "clear the reference".
    pub async fn update(&self, id: Uuid, data: &UpdateEmployee) -> AppResult<Employee> {
        sqlx::query_as::<_, Employee>(
            "UPDATE employees SET \
                 first_name = COALESCE($2, first_name), \
                 last_name = COALESCE($3, last_name), \
                 title = COALESCE($4, title), \
                 is_manager = CASE WHEN $5 THEN $6 ELSE is_manager END, \
                 department_id = CASE WHEN $7 THEN $8 ELSE department_id END, \
                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.title)
        .bind(data.is_manager.is_some())
        .bind(data.is_manager.flatten())
        .bind(data.department_id.is_some())
        .bind(data.department_id.flatten())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update employee", e))?
        .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))
    }

    /// Delete an employee by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete employee", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}

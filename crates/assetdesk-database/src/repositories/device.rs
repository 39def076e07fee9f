//! Device repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use assetdesk_core::error::{AppError, ErrorKind};
use assetdesk_core::result::AppResult;
use assetdesk_core::types::pagination::{PageRequest, PageResponse};
use assetdesk_entity::device::{AssignDevice, CreateDevice, Device, UpdateDevice};

/// Repository for device CRUD and assignment operations.
#[derive(Debug, Clone)]
pub struct DeviceRepository {
    pool: PgPool,
}

impl DeviceRepository {
    /// Create a new device repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a device by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Device>> {
        sqlx::query_as::<_, Device>("SELECT * FROM devices WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find device by id", e)
            })
    }

    /// List all devices with pagination.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Device>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM devices")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count devices", e))?;

        let devices = sqlx::query_as::<_, Device>(
            "SELECT * FROM devices ORDER BY name ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list devices", e))?;

        Ok(PageResponse::new(
            devices,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List devices assigned to an employee.
    pub async fn find_by_assignee(&self, employee_id: Uuid) -> AppResult<Vec<Device>> {
        sqlx::query_as::<_, Device>(
            "SELECT * FROM devices WHERE assigned_to = $1 ORDER BY name ASC",
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list assigned devices", e)
        })
    }

    /// Register a new device.
    pub async fn create(&self, data: &CreateDevice) -> AppResult<Device> {
        sqlx::query_as::<_, Device>(
            "INSERT INTO devices (name, serial_number, category) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.serial_number)
        .bind(&data.category)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("devices_serial_number_key") =>
            {
                AppError::conflict(format!(
                    "Serial number '{}' is already registered",
                    data.serial_number
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create device", e),
        })
    }

    /// Apply a partial update to a device.
    pub async fn update(&self, id: Uuid, data: &UpdateDevice) -> AppResult<Device> {
        sqlx::query_as::<_, Device>(
            "UPDATE devices SET \
                 name = COALESCE($2, name), \
                 serial_number = COALESCE($3, serial_number), \
                 category = COALESCE($4, category), \
                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.serial_number)
        .bind(&data.category)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update device", e))?
        .ok_or_else(|| AppError::not_found(format!("Device {id} not found")))
    }

    /// Change a device's assignment and recorded approver.
    pub async fn set_assignment(&self, id: Uuid, data: &AssignDevice) -> AppResult<Device> {
        sqlx::query_as::<_, Device>(
            "UPDATE devices SET assigned_to = $2, approved_by = $3, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.assigned_to)
        .bind(data.approved_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to assign device", e))?
        .ok_or_else(|| AppError::not_found(format!("Device {id} not found")))
    }

    /// Delete a device by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM devices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete device", e))?;

        Ok(result.rows_affected() > 0)
    }
}

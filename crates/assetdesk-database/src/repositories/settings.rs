//! Organization settings repository implementation.
//!
//! The settings table holds a single row guarded by a boolean primary
//! key that is always `true`, so the upsert below can never create a
//! second row.

use sqlx::PgPool;
use uuid::Uuid;

use assetdesk_core::error::{AppError, ErrorKind};
use assetdesk_core::result::AppResult;
use assetdesk_entity::settings::OrgSettings;

/// Repository for the singleton organization settings row.
#[derive(Debug, Clone)]
pub struct OrgSettingsRepository {
    pool: PgPool,
}

impl OrgSettingsRepository {
    /// Create a new settings repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the settings row, if one has been written yet.
    pub async fn get(&self) -> AppResult<Option<OrgSettings>> {
        sqlx::query_as::<_, OrgSettings>("SELECT * FROM org_settings WHERE singleton")
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to load org settings", e)
            })
    }

    /// Set or clear the designated general manager.
    pub async fn set_general_manager(
        &self,
        general_manager_id: Option<Uuid>,
    ) -> AppResult<OrgSettings> {
        sqlx::query_as::<_, OrgSettings>(
            "INSERT INTO org_settings (singleton, general_manager_id) \
             VALUES (TRUE, $1) \
             ON CONFLICT (singleton) DO UPDATE \
                 SET general_manager_id = EXCLUDED.general_manager_id, \
                     updated_at = NOW() \
             RETURNING *",
        )
        .bind(general_manager_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update org settings", e)
        })
    }
}

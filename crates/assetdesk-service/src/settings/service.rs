//! Organization settings, currently just the general manager designation.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use assetdesk_core::error::AppError;
use assetdesk_core::result::AppResult;
use assetdesk_database::repositories::employee::EmployeeRepository;
use assetdesk_database::repositories::settings::OrgSettingsRepository;
use assetdesk_entity::settings::OrgSettings;

use crate::context::RequestContext;

/// Handles organization-wide settings.
#[derive(Debug, Clone)]
pub struct SettingsService {
    /// Settings repository.
    settings_repo: Arc<OrgSettingsRepository>,
    /// Employee repository, for designation checks.
    employee_repo: Arc<EmployeeRepository>,
}

impl SettingsService {
    /// Creates a new settings service.
    pub fn new(
        settings_repo: Arc<OrgSettingsRepository>,
        employee_repo: Arc<EmployeeRepository>,
    ) -> Self {
        Self {
            settings_repo,
            employee_repo,
        }
    }

    /// Fetches the current settings. An unwritten settings row reads as
    /// "no general manager designated".
    pub async fn get(&self) -> AppResult<Option<OrgSettings>> {
        self.settings_repo.get().await
    }

    /// Designates or clears the organization-wide general manager.
    pub async fn set_general_manager(
        &self,
        ctx: &RequestContext,
        general_manager_id: Option<Uuid>,
    ) -> AppResult<OrgSettings> {
        ctx.require_admin()?;

        if let Some(employee_id) = general_manager_id {
            self.employee_repo
                .find_by_id(employee_id)
                .await?
                .ok_or_else(|| {
                    AppError::validation(format!("Employee {employee_id} does not exist"))
                })?;
        }

        let settings = self
            .settings_repo
            .set_general_manager(general_manager_id)
            .await?;
        info!(general_manager_id = ?general_manager_id, "General manager designation changed");
        Ok(settings)
    }
}

//! Management division CRUD and manager designation.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use assetdesk_core::error::AppError;
use assetdesk_core::result::AppResult;
use assetdesk_core::types::pagination::{PageRequest, PageResponse};
use assetdesk_database::repositories::division::DivisionRepository;
use assetdesk_database::repositories::employee::EmployeeRepository;
use assetdesk_entity::division::{CreateDivision, Division, UpdateDivision};

use crate::context::RequestContext;

/// Handles management division operations.
#[derive(Debug, Clone)]
pub struct DivisionService {
    /// Division repository.
    division_repo: Arc<DivisionRepository>,
    /// Employee repository, for manager designation checks.
    employee_repo: Arc<EmployeeRepository>,
}

impl DivisionService {
    /// Creates a new division service.
    pub fn new(
        division_repo: Arc<DivisionRepository>,
        employee_repo: Arc<EmployeeRepository>,
    ) -> Self {
        Self {
            division_repo,
            employee_repo,
        }
    }

    /// Lists divisions with pagination.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Division>> {
        self.division_repo.find_all(page).await
    }

    /// Fetches a single division.
    pub async fn get(&self, id: Uuid) -> AppResult<Division> {
        self.division_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Division {id} not found")))
    }

    /// Creates a new division.
    pub async fn create(&self, ctx: &RequestContext, data: CreateDivision) -> AppResult<Division> {
        ctx.require_admin()?;

        if data.name.trim().is_empty() {
            return Err(AppError::validation("Division name cannot be empty"));
        }
        self.check_manager(data.manager_id).await?;

        let division = self.division_repo.create(&data).await?;
        info!(division_id = %division.id, "Division created");
        Ok(division)
    }

    /// Applies a partial update to a division.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateDivision,
    ) -> AppResult<Division> {
        ctx.require_admin()?;
        self.check_manager(data.manager_id.flatten()).await?;

        let division = self.division_repo.update(id, &data).await?;
        info!(division_id = %division.id, "Division updated");
        Ok(division)
    }

    /// Designates or clears the division manager.
    pub async fn set_manager(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        manager_id: Option<Uuid>,
    ) -> AppResult<Division> {
        ctx.require_admin()?;
        self.check_manager(manager_id).await?;

        let division = self.division_repo.set_manager(id, manager_id).await?;
        info!(division_id = %id, manager_id = ?manager_id, "Division manager changed");
        Ok(division)
    }

    /// Deletes a division.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        ctx.require_admin()?;

        let deleted = self.division_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(format!("Division {id} not found")));
        }
        info!(division_id = %id, "Division deleted");
        Ok(())
    }

    async fn check_manager(&self, manager_id: Option<Uuid>) -> AppResult<()> {
        if let Some(manager_id) = manager_id {
            self.employee_repo
                .find_by_id(manager_id)
                .await?
                .ok_or_else(|| {
                    AppError::validation(format!("Employee {manager_id} does not exist"))
                })?;
        }
        Ok(())
    }
}

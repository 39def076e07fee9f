//! Department CRUD with referential checks.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use assetdesk_core::error::AppError;
use assetdesk_core::result::AppResult;
use assetdesk_core::types::pagination::{PageRequest, PageResponse};
use assetdesk_database::repositories::department::DepartmentRepository;
use assetdesk_database::repositories::division::DivisionRepository;
use assetdesk_entity::department::{CreateDepartment, Department, UpdateDepartment};

use crate::context::RequestContext;

/// Handles department operations.
#[derive(Debug, Clone)]
pub struct DepartmentService {
    /// Department repository.
    department_repo: Arc<DepartmentRepository>,
    /// Division repository, for reporting-line checks.
    division_repo: Arc<DivisionRepository>,
}

impl DepartmentService {
    /// Creates a new department service.
    pub fn new(
        department_repo: Arc<DepartmentRepository>,
        division_repo: Arc<DivisionRepository>,
    ) -> Self {
        Self {
            department_repo,
            division_repo,
        }
    }

    /// Lists departments with pagination.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Department>> {
        self.department_repo.find_all(page).await
    }

    /// Fetches a single department.
    pub async fn get(&self, id: Uuid) -> AppResult<Department> {
        self.department_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Department {id} not found")))
    }

    /// Creates a new department.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: CreateDepartment,
    ) -> AppResult<Department> {
        ctx.require_admin()?;

        if data.name.trim().is_empty() {
            return Err(AppError::validation("Department name cannot be empty"));
        }
        self.check_division(data.division_id).await?;

        let department = self.department_repo.create(&data).await?;
        info!(department_id = %department.id, "Department created");
        Ok(department)
    }

    /// Applies a partial update to a department.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateDepartment,
    ) -> AppResult<Department> {
        ctx.require_admin()?;
        self.check_division(data.division_id.flatten()).await?;

        let department = self.department_repo.update(id, &data).await?;
        info!(department_id = %department.id, "Department updated");
        Ok(department)
    }

    /// Deletes a department.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        ctx.require_admin()?;

        let deleted = self.department_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(format!("Department {id} not found")));
        }
        info!(department_id = %id, "Department deleted");
        Ok(())
    }

    async fn check_division(&self, division_id: Option<Uuid>) -> AppResult<()> {
        if let Some(division_id) = division_id {
            self.division_repo
                .find_by_id(division_id)
                .await?
                .ok_or_else(|| {
                    AppError::validation(format!("Division {division_id} does not exist"))
                })?;
        }
        Ok(())
    }
}

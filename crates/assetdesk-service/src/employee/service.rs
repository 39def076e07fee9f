//! Employee CRUD with referential checks.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use assetdesk_core::error::AppError;
use assetdesk_core::result::AppResult;
use assetdesk_core::types::pagination::{PageRequest, PageResponse};
use assetdesk_database::repositories::department::DepartmentRepository;
use assetdesk_database::repositories::employee::EmployeeRepository;
use assetdesk_entity::employee::{CreateEmployee, Employee, UpdateEmployee};

use crate::context::RequestContext;

/// Handles employee directory operations.
#[derive(Debug, Clone)]
pub struct EmployeeService {
    /// Employee repository.
    employee_repo: Arc<EmployeeRepository>,
    /// Department repository, for membership checks.
    department_repo: Arc<DepartmentRepository>,
}

impl EmployeeService {
    /// Creates a new employee service.
    pub fn new(
        employee_repo: Arc<EmployeeRepository>,
        department_repo: Arc<DepartmentRepository>,
    ) -> Self {
        Self {
            employee_repo,
            department_repo,
        }
    }

    /// Lists employees with pagination.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Employee>> {
        self.employee_repo.find_all(page).await
    }

    /// Fetches a single employee.
    pub async fn get(&self, id: Uuid) -> AppResult<Employee> {
        self.employee_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))
    }

    /// Lists the members of a department.
    pub async fn list_by_department(&self, department_id: Uuid) -> AppResult<Vec<Employee>> {
        self.employee_repo.find_by_department(department_id).await
    }

    /// Creates a new employee.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: CreateEmployee,
    ) -> AppResult<Employee> {
        ctx.require_admin()?;
        self.check_department(data.department_id).await?;

        let employee = self.employee_repo.create(&data).await?;
        info!(employee_id = %employee.id, "Employee created");
        Ok(employee)
    }

    /// Applies a partial update to an employee.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateEmployee,
    ) -> AppResult<Employee> {
        ctx.require_admin()?;
        self.check_department(data.department_id.flatten()).await?;

        let employee = self.employee_repo.update(id, &data).await?;
        info!(employee_id = %employee.id, "Employee updated");
        Ok(employee)
    }

    /// Deletes an employee.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        ctx.require_admin()?;

        let deleted = self.employee_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(format!("Employee {id} not found")));
        }
        info!(employee_id = %id, "Employee deleted");
        Ok(())
    }

    async fn check_department(&self, department_id: Option<Uuid>) -> AppResult<()> {
        if let Some(department_id) = department_id {
            self.department_repo
                .find_by_id(department_id)
                .await?
                .ok_or_else(|| {
                    AppError::validation(format!("Department {department_id} does not exist"))
                })?;
        }
        Ok(())
    }
}

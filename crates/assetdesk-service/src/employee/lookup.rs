//! Employee existence checks as other services see them.

use std::fmt;

use async_trait::async_trait;
use uuid::Uuid;

use assetdesk_core::result::AppResult;
use assetdesk_database::repositories::employee::EmployeeRepository;
use assetdesk_entity::employee::Employee;

/// Read-only employee lookup used to validate foreign references
/// before they reach the database.
#[async_trait]
pub trait EmployeeLookup: fmt::Debug + Send + Sync {
    /// Look up an employee by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>>;
}

#[async_trait]
impl EmployeeLookup for EmployeeRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>> {
        EmployeeRepository::find_by_id(self, id).await
    }
}

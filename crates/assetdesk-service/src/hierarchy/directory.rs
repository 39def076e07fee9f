//! Read-only view of the org structure consumed by the resolver.

use async_trait::async_trait;
use uuid::Uuid;

use assetdesk_core::result::AppResult;
use assetdesk_database::repositories::hierarchy::OrgSnapshot;
use assetdesk_entity::employee::Employee;

/// Lookups the resolver needs, abstracted so the resolution algorithm
/// can be tested against an in-memory directory.
///
/// Implementations must answer all calls from one consistent snapshot;
/// a chain observed mid-edit would let the resolver return a manager
/// that never actually held the role.
#[async_trait]
pub trait OrgDirectory {
    /// Look up an employee by ID.
    async fn employee(&mut self, id: Uuid) -> AppResult<Option<Employee>>;

    /// Resolve the manager of the division a department reports into.
    async fn department_manager(&mut self, department_id: Uuid) -> AppResult<Option<Employee>>;

    /// Load the designated general manager, if configured.
    async fn general_manager(&mut self) -> AppResult<Option<Employee>>;
}

#[async_trait]
impl OrgDirectory for OrgSnapshot {
    async fn employee(&mut self, id: Uuid) -> AppResult<Option<Employee>> {
        OrgSnapshot::employee(self, id).await
    }

    async fn department_manager(&mut self, department_id: Uuid) -> AppResult<Option<Employee>> {
        OrgSnapshot::department_manager(self, department_id).await
    }

    async fn general_manager(&mut self) -> AppResult<Option<Employee>> {
        OrgSnapshot::general_manager(self).await
    }
}

//! Read-only organizational lookups used by manager resolution.
//!
//! All lookups for a single resolution run inside one transaction so
//! the resolver observes a consistent snapshot of the org structure
//! even while concurrent edits are happening.

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use assetdesk_core::error::{AppError, ErrorKind};
use assetdesk_core::result::AppResult;
use assetdesk_entity::employee::Employee;

/// Factory for consistent organizational snapshots.
#[derive(Debug, Clone)]
pub struct HierarchyRepository {
    pool: PgPool,
}

impl HierarchyRepository {
    /// Create a new hierarchy repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a snapshot transaction for one resolution pass.
    pub async fn snapshot(&self) -> AppResult<OrgSnapshot> {
        let tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to open org snapshot", e)
        })?;
        Ok(OrgSnapshot { tx })
    }
}

/// A consistent view of the org structure backed by a single
/// transaction.
pub struct OrgSnapshot {
    tx: Transaction<'static, Postgres>,
}

impl OrgSnapshot {
    /// Look up an employee by ID.
    pub async fn employee(&mut self, id: Uuid) -> AppResult<Option<Employee>> {
        sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to load employee", e)
            })
    }

    /// Resolve the manager of the division a department belongs to.
    ///
    /// Returns `None` when the department does not exist, has no
    /// division, or the division has no designated manager.
    pub async fn department_manager(
        &mut self,
        department_id: Uuid,
    ) -> AppResult<Option<Employee>> {
        sqlx::query_as::<_, Employee>(
            "SELECT e.* FROM departments d \
             JOIN divisions v ON v.id = d.division_id \
             JOIN employees e ON e.id = v.manager_id \
             WHERE d.id = $1",
        )
        .bind(department_id)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load department manager", e)
        })
    }

    /// Load the designated general manager, if one is configured and
    /// still refers to an existing employee.
    pub async fn general_manager(&mut self) -> AppResult<Option<Employee>> {
        sqlx::query_as::<_, Employee>(
            "SELECT e.* FROM org_settings s \
             JOIN employees e ON e.id = s.general_manager_id \
             WHERE s.singleton",
        )
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load general manager", e)
        })
    }

    /// Close the snapshot. Lookups are read-only, so the transaction
    /// is rolled back rather than committed.
    pub async fn close(self) -> AppResult<()> {
        self.tx.rollback().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to close org snapshot", e)
        })
    }
}

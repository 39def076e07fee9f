//! Hierarchy resolution service backed by database snapshots.

use std::sync::Arc;

use tracing::debug;

use assetdesk_core::result::AppResult;
use assetdesk_database::repositories::hierarchy::HierarchyRepository;
use assetdesk_entity::employee::Employee;

use super::resolver::{ApproverTarget, resolve_manager};

/// Resolves approving managers against a consistent database snapshot.
#[derive(Debug, Clone)]
pub struct HierarchyService {
    /// Snapshot factory.
    hierarchy_repo: Arc<HierarchyRepository>,
}

impl HierarchyService {
    /// Creates a new hierarchy service.
    pub fn new(hierarchy_repo: Arc<HierarchyRepository>) -> Self {
        Self { hierarchy_repo }
    }

    /// Resolve the approving manager for the given target.
    ///
    /// The whole resolution runs inside a single transaction so the
    /// chain and the general-manager designation are read consistently.
    pub async fn resolve(
        &self,
        target: ApproverTarget,
        prefer_global_for_managers: bool,
    ) -> AppResult<Option<Employee>> {
        let mut snapshot = self.hierarchy_repo.snapshot().await?;
        let resolved = resolve_manager(&mut snapshot, target, prefer_global_for_managers).await;
        snapshot.close().await?;

        let resolved = resolved?;
        debug!(
            ?target,
            prefer_global_for_managers,
            resolved = resolved.as_ref().map(|e| e.id.to_string()),
            "Resolved approving manager"
        );
        Ok(resolved)
    }
}

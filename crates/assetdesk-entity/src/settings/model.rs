//! Organization settings entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Process-wide configuration singleton. At most one row exists; the
/// database enforces this with a constant-true primary key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrgSettings {
    /// Singleton marker, always `true`.
    #[serde(skip_serializing)]
    pub singleton: bool,
    /// The employee designated as the organization-wide general manager.
    pub general_manager_id: Option<Uuid>,
    /// When the settings were last updated.
    pub updated_at: DateTime<Utc>,
}

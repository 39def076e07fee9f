//! Department entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A department — the organizational unit employees belong to.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Department {
    /// Unique department identifier.
    pub id: Uuid,
    /// Department name.
    pub name: String,
    /// The management division this department reports into, if any.
    pub division_id: Option<Uuid>,
    /// When the department was created.
    pub created_at: DateTime<Utc>,
    /// When the department was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDepartment {
    /// Department name.
    pub name: String,
    /// Reporting division (optional).
    pub division_id: Option<Uuid>,
}

/// Partial update for an existing department.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDepartment {
    /// New name.
    pub name: Option<String>,
    /// New reporting division. `Some(None)` detaches the department.
    pub division_id: Option<Option<Uuid>>,
}

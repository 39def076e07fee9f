//! Management division entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A management division — departments report into divisions, and each
/// division may designate a managing employee.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Division {
    /// Unique division identifier.
    pub id: Uuid,
    /// Division name.
    pub name: String,
    /// The employee acting as this division's manager, if designated.
    pub manager_id: Option<Uuid>,
    /// When the division was created.
    pub created_at: DateTime<Utc>,
    /// When the division was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new division.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDivision {
    /// Division name.
    pub name: String,
    /// Designated manager (optional).
    pub manager_id: Option<Uuid>,
}

/// Partial update for an existing division.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDivision {
    /// New name.
    pub name: Option<String>,
    /// New designated manager. `Some(None)` clears the designation.
    pub manager_id: Option<Option<Uuid>>,
}

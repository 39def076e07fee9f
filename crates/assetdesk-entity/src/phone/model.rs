//! Phone line entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A company phone line with its carrier contract.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PhoneLine {
    /// Unique line identifier.
    pub id: Uuid,
    /// Phone number in E.164 or local form.
    pub number: String,
    /// Carrier name.
    pub carrier: String,
    /// The employee this line is assigned to, if any.
    pub assigned_to: Option<Uuid>,
    /// The manager who approved the current assignment, if any.
    pub approved_by: Option<Uuid>,
    /// When the line was registered.
    pub created_at: DateTime<Utc>,
    /// When the line was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to register a new phone line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePhoneLine {
    /// Phone number.
    pub number: String,
    /// Carrier name.
    pub carrier: String,
}

/// Partial update for an existing phone line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePhoneLine {
    /// New number.
    pub number: Option<String>,
    /// New carrier.
    pub carrier: Option<String>,
}

/// Assignment change for a phone line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignPhoneLine {
    /// The employee receiving the line, or `None` to release it.
    pub assigned_to: Option<Uuid>,
    /// The approving manager recorded for the assignment.
    pub approved_by: Option<Uuid>,
}

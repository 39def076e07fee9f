//! Device entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A managed piece of equipment (laptop, monitor, badge reader, ...).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Device {
    /// Unique device identifier.
    pub id: Uuid,
    /// Device name.
    pub name: String,
    /// Vendor serial number.
    pub serial_number: String,
    /// Free-text category, e.g. "laptop".
    pub category: String,
    /// The employee this device is assigned to, if any.
    pub assigned_to: Option<Uuid>,
    /// The manager who approved the current assignment, if any.
    pub approved_by: Option<Uuid>,
    /// When the device was registered.
    pub created_at: DateTime<Utc>,
    /// When the device was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to register a new device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDevice {
    /// Device name.
    pub name: String,
    /// Vendor serial number.
    pub serial_number: String,
    /// Category.
    pub category: String,
}

/// Partial update for an existing device.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDevice {
    /// New name.
    pub name: Option<String>,
    /// New serial number.
    pub serial_number: Option<String>,
    /// New category.
    pub category: Option<String>,
}

/// Assignment change for a device. A `None` employee releases the device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignDevice {
    /// The employee receiving the device, or `None` to release it.
    pub assigned_to: Option<Uuid>,
    /// The approving manager recorded for the assignment.
    pub approved_by: Option<Uuid>,
}

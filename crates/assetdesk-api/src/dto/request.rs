//! Request DTOs with validation.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Deserializes a present-but-possibly-null field into `Some(inner)`.
///
/// Combined with `#[serde(default)]` this distinguishes an absent
/// field (`None`, leave unchanged) from an explicit `null`
/// (`Some(None)`, clear the value).
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create account request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAccountRequest {
    /// Username.
    #[validate(length(min = 3, max = 100))]
    pub username: String,
    /// Password.
    #[validate(length(min = 8))]
    pub password: String,
    /// Display name.
    pub display_name: Option<String>,
    /// Role: "admin" or "user".
    pub role: String,
}

/// Password reset request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    /// New password.
    #[validate(length(min = 8))]
    pub new_password: String,
}

/// Create employee request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    /// Given name.
    #[validate(length(min = 1, max = 255))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, max = 255))]
    pub last_name: String,
    /// Role/title text.
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    /// Explicit manager classification.
    pub is_manager: Option<bool>,
    /// Department membership.
    pub department_id: Option<Uuid>,
}

/// Partial employee update. Absent fields are left unchanged; for the
/// nullable fields, an explicit `null` clears the value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployeeRequest {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New title.
    pub title: Option<String>,
    /// New manager classification.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub is_manager: Option<Option<bool>>,
    /// New department membership.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub department_id: Option<Option<Uuid>>,
}

/// Create department request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDepartmentRequest {
    /// Department name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Division the department reports into.
    pub division_id: Option<Uuid>,
}

/// Partial department update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDepartmentRequest {
    /// New name.
    pub name: Option<String>,
    /// New division reference.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub division_id: Option<Option<Uuid>>,
}

/// Create division request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDivisionRequest {
    /// Division name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Designated manager.
    pub manager_id: Option<Uuid>,
}

/// Partial division update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDivisionRequest {
    /// New name.
    pub name: Option<String>,
    /// New manager designation.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub manager_id: Option<Option<Uuid>>,
}

/// Division manager designation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetManagerRequest {
    /// Employee to designate, or `null` to clear.
    pub manager_id: Option<Uuid>,
}

/// Create device request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDeviceRequest {
    /// Device name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Serial number.
    #[validate(length(min = 1, max = 255))]
    pub serial_number: String,
    /// Category, e.g. "laptop".
    #[validate(length(min = 1, max = 100))]
    pub category: String,
}

/// Partial device update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDeviceRequest {
    /// New name.
    pub name: Option<String>,
    /// New serial number.
    pub serial_number: Option<String>,
    /// New category.
    pub category: Option<String>,
}

/// Assignment change request for devices and phone lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentRequest {
    /// Employee to assign to, or `null` to unassign.
    pub assigned_to: Option<Uuid>,
    /// Approving manager. When omitted, one is resolved from the org
    /// hierarchy.
    pub approved_by: Option<Uuid>,
}

/// Create phone line request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePhoneLineRequest {
    /// Phone number.
    #[validate(length(min = 1, max = 50))]
    pub number: String,
    /// Carrier name.
    #[validate(length(min = 1, max = 100))]
    pub carrier: String,
}

/// Partial phone line update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePhoneLineRequest {
    /// New number.
    pub number: Option<String>,
    /// New carrier.
    pub carrier: Option<String>,
}

/// General manager designation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetGeneralManagerRequest {
    /// Employee to designate, or `null` to clear.
    pub general_manager_id: Option<Uuid>,
}

/// Query parameters for approver resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveApproverQuery {
    /// Target kind: "employee" or "department".
    pub target_type: String,
    /// Target identifier.
    pub target_id: Uuid,
    /// Whether manager-titled employees route to the general manager.
    #[serde(default = "default_prefer_global")]
    pub prefer_global: bool,
}

fn default_prefer_global() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_employee_distinguishes_absent_from_null() {
        let absent: UpdateEmployeeRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(absent.department_id, None);

        let cleared: UpdateEmployeeRequest =
            serde_json::from_str(r#"{"department_id": null}"#).unwrap();
        assert_eq!(cleared.department_id, Some(None));

        let id = Uuid::new_v4();
        let set: UpdateEmployeeRequest =
            serde_json::from_str(&format!(r#"{{"department_id": "{id}"}}"#)).unwrap();
        assert_eq!(set.department_id, Some(Some(id)));
    }

    #[test]
    fn test_resolve_query_defaults_prefer_global() {
        let q: ResolveApproverQuery = serde_json::from_str(&format!(
            r#"{{"target_type": "employee", "target_id": "{}"}}"#,
            Uuid::new_v4()
        ))
        .unwrap();
        assert!(q.prefer_global);
    }
}

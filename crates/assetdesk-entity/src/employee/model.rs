//! Employee entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An employee in the organizational directory.
///
/// Employees belong to at most one department at a time; the department's
/// division chain leads to the manager accountable for approvals.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Free-text role/title field, e.g. "Regional Manager".
    pub title: String,
    /// Explicit manager classification. When unset, the title substring
    /// check is the migration fallback.
    pub is_manager: Option<bool>,
    /// The department this employee belongs to, if any.
    pub department_id: Option<Uuid>,
    /// When the employee record was created.
    pub created_at: DateTime<Utc>,
    /// When the employee record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Full display label, e.g. for approver picklists.
    pub fn display_label(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether this employee counts as a manager for approval routing.
    ///
    /// The explicit `is_manager` attribute is authoritative; records that
    /// predate it fall back to a case-insensitive substring match on the
    /// title field.
    pub fn holds_manager_role(&self) -> bool {
        match self.is_manager {
            Some(explicit) => explicit,
            None => self.title.to_lowercase().contains("manager"),
        }
    }
}

/// Data required to create a new employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployee {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Role/title text.
    pub title: String,
    /// Explicit manager classification (optional).
    pub is_manager: Option<bool>,
    /// Department membership (optional).
    pub department_id: Option<Uuid>,
}

/// Partial update for an existing employee. Unset fields are left as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployee {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New title.
    pub title: Option<String>,
    /// New manager classification. `Some(None)` clears the flag back to
    /// the title fallback.
    pub is_manager: Option<Option<bool>>,
    /// New department membership. `Some(None)` detaches the employee.
    pub department_id: Option<Option<Uuid>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(title: &str, is_manager: Option<bool>) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            first_name: "Dana".to_string(),
            last_name: "Ito".to_string(),
            title: title.to_string(),
            is_manager,
            department_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_title_substring_fallback_is_case_insensitive() {
        assert!(employee("Regional Manager", None).holds_manager_role());
        assert!(employee("MANAGER of things", None).holds_manager_role());
        assert!(!employee("Analyst", None).holds_manager_role());
    }

    #[test]
    fn test_explicit_flag_overrides_title() {
        // An explicit classification wins over the title text.
        assert!(!employee("Regional Manager", Some(false)).holds_manager_role());
        assert!(employee("Analyst", Some(true)).holds_manager_role());
    }

    #[test]
    fn test_display_label() {
        assert_eq!(employee("Analyst", None).display_label(), "Dana Ito");
    }
}

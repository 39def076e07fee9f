//! Request context carrying the authenticated caller.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use assetdesk_auth::Claims;
use assetdesk_core::error::AppError;
use assetdesk_entity::account::Role;

/// Context for the current authenticated request.
///
/// Built from decoded session claims by the HTTP layer and passed into
/// service methods so that every operation knows who is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated account's ID.
    pub account_id: Uuid,
    /// The account's role at the time the session was issued.
    pub role: Role,
    /// The username (convenience field from session claims).
    pub username: String,
}

impl RequestContext {
    /// Creates a request context from decoded session claims.
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            account_id: claims.sub,
            role: claims.role,
            username: claims.username.clone(),
        }
    }

    /// Returns whether the current caller is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Fails with a forbidden error unless the caller is an admin.
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::forbidden("Administrator role required"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(role: Role) -> RequestContext {
        RequestContext {
            account_id: Uuid::new_v4(),
            role,
            username: "tester".to_string(),
        }
    }

    #[test]
    fn test_require_admin() {
        assert!(ctx(Role::Admin).require_admin().is_ok());
        assert!(ctx(Role::User).require_admin().is_err());
    }
}

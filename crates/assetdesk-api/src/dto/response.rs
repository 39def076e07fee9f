//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use assetdesk_auth::Claims;
use assetdesk_entity::account::Account;
use assetdesk_entity::employee::Employee;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Account summary for responses; never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    /// Account ID.
    pub id: Uuid,
    /// Username.
    pub username: String,
    /// Display name.
    pub display_name: Option<String>,
    /// Role.
    pub role: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Last login.
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            username: account.username,
            display_name: account.display_name,
            role: account.role.to_string(),
            created_at: account.created_at,
            last_login_at: account.last_login_at,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The authenticated account.
    pub account: AccountResponse,
    /// When the issued session expires.
    pub session_expires_at: DateTime<Utc>,
}

/// Decoded session claims, as returned by session introspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaimsResponse {
    /// Subject account ID.
    pub subject_id: Uuid,
    /// Role.
    pub role: String,
    /// Username.
    pub username: String,
    /// Expiry.
    pub expires_at: DateTime<Utc>,
}

impl From<Claims> for SessionClaimsResponse {
    fn from(claims: Claims) -> Self {
        Self {
            subject_id: claims.sub,
            role: claims.role.to_string(),
            username: claims.username.clone(),
            expires_at: claims.expires_at(),
        }
    }
}

/// Resolved approving manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproverResponse {
    /// The manager's employee ID.
    pub id: Uuid,
    /// Human-readable label for picklists.
    pub display_label: String,
}

impl From<Employee> for ApproverResponse {
    fn from(employee: Employee) -> Self {
        Self {
            display_label: employee.display_label(),
            id: employee.id,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Database status.
    pub database: String,
}

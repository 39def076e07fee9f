//! Account management operations, admin-only.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use assetdesk_auth::password::{PasswordHasher, PasswordValidator};
use assetdesk_core::error::AppError;
use assetdesk_core::result::AppResult;
use assetdesk_core::types::pagination::{PageRequest, PageResponse};
use assetdesk_database::repositories::account::AccountRepository;
use assetdesk_entity::account::{Account, CreateAccount, Role};

use crate::context::RequestContext;

/// Handles administrator operations on login accounts.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// Account repository.
    account_repo: Arc<AccountRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy validator.
    validator: Arc<PasswordValidator>,
}

/// Input for creating a new login account.
#[derive(Debug, Clone)]
pub struct NewAccount {
    /// Desired username.
    pub username: String,
    /// Plaintext password, validated and hashed before storage.
    pub password: String,
    /// Display name (optional).
    pub display_name: Option<String>,
    /// Assigned role.
    pub role: Role,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        account_repo: Arc<AccountRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            account_repo,
            hasher,
            validator,
        }
    }

    /// Lists accounts with pagination.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Account>> {
        ctx.require_admin()?;
        self.account_repo.find_all(page).await
    }

    /// Fetches a single account.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Account> {
        ctx.require_admin()?;
        self.account_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Account {id} not found")))
    }

    /// Creates a new login account.
    pub async fn create(&self, ctx: &RequestContext, data: NewAccount) -> AppResult<Account> {
        ctx.require_admin()?;

        if data.username.trim().is_empty() {
            return Err(AppError::validation("Username cannot be empty"));
        }
        self.validator.validate(&data.password)?;

        let password_hash = self.hasher.hash_password(&data.password)?;
        let account = self
            .account_repo
            .create(&CreateAccount {
                username: data.username,
                password_hash,
                display_name: data.display_name,
                role: data.role,
            })
            .await?;

        info!(account_id = %account.id, username = %account.username, "Account created");
        Ok(account)
    }

    /// Resets an account's password.
    pub async fn reset_password(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        new_password: &str,
    ) -> AppResult<()> {
        ctx.require_admin()?;

        self.validator.validate(new_password)?;
        let hash = self.hasher.hash_password(new_password)?;
        self.account_repo.update_password(id, &hash).await?;

        info!(account_id = %id, "Password reset");
        Ok(())
    }

    /// Deletes an account. Admins cannot delete their own account.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        ctx.require_admin()?;

        if id == ctx.account_id {
            return Err(AppError::validation("Cannot delete your own account"));
        }

        let deleted = self.account_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(format!("Account {id} not found")));
        }

        info!(account_id = %id, "Account deleted");
        Ok(())
    }
}

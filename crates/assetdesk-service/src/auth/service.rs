//! Login flow and session decoding.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use assetdesk_auth::password::PasswordHasher;
use assetdesk_auth::token::{Claims, SessionCodec, SessionToken};
use assetdesk_core::error::AppError;
use assetdesk_core::result::AppResult;
use assetdesk_database::repositories::account::AccountRepository;
use assetdesk_entity::account::Account;

/// Credential storage as the login flow sees it.
#[async_trait]
pub trait AccountStore: fmt::Debug + Send + Sync {
    /// Look up an account by username (case-insensitive).
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>>;

    /// Record a successful login for the account.
    async fn record_login(&self, account_id: Uuid) -> AppResult<()>;
}

#[async_trait]
impl AccountStore for AccountRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        AccountRepository::find_by_username(self, username).await
    }

    async fn record_login(&self, account_id: Uuid) -> AppResult<()> {
        self.update_last_login(account_id).await
    }
}

/// Handles login, session issuance, and session decoding.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// Credential store.
    accounts: Arc<dyn AccountStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Session token codec.
    codec: Arc<SessionCodec>,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated account.
    pub account: Account,
    /// The freshly issued session token.
    pub session: SessionToken,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        accounts: Arc<dyn AccountStore>,
        hasher: Arc<PasswordHasher>,
        codec: Arc<SessionCodec>,
    ) -> Self {
        Self {
            accounts,
            hasher,
            codec,
        }
    }

    /// Verifies credentials and issues a session token.
    ///
    /// An unknown username and a wrong password both fail with the same
    /// invalid-credentials error so callers cannot enumerate accounts.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginOutcome> {
        let Some(account) = self.accounts.find_by_username(username).await? else {
            warn!(username, "Login attempt for unknown username");
            return Err(AppError::invalid_credentials());
        };

        let valid = self
            .hasher
            .verify_password(password, &account.password_hash)?;
        if !valid {
            warn!(account_id = %account.id, "Login attempt with wrong password");
            return Err(AppError::invalid_credentials());
        }

        self.accounts.record_login(account.id).await?;

        let session = self.codec.issue(&account)?;
        info!(account_id = %account.id, "Login successful");

        Ok(LoginOutcome { account, session })
    }

    /// Decodes and validates a session token.
    pub fn decode_session(&self, token: &str) -> AppResult<Claims> {
        self.codec.decode(token)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use chrono::Utc;

    use assetdesk_core::config::AuthConfig;
    use assetdesk_core::error::ErrorKind;
    use assetdesk_entity::account::Role;

    use super::*;

    /// In-memory credential store keyed by lowercased username.
    #[derive(Debug, Default)]
    struct FakeAccounts {
        accounts: HashMap<String, Account>,
        logins: Mutex<Vec<Uuid>>,
    }

    #[async_trait]
    impl AccountStore for FakeAccounts {
        async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
            Ok(self.accounts.get(&username.to_lowercase()).cloned())
        }

        async fn record_login(&self, account_id: Uuid) -> AppResult<()> {
            self.logins.lock().unwrap().push(account_id);
            Ok(())
        }
    }

    fn auth_config() -> AuthConfig {
        AuthConfig {
            session_secret: "test-secret".to_string(),
            session_ttl_days: 7,
            cookie_name: "assetdesk_session".to_string(),
            password_min_length: 8,
        }
    }

    fn seeded_account(username: &str, password: &str, role: Role) -> Account {
        let now = Utc::now();
        Account {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: PasswordHasher::new().hash_password(password).unwrap(),
            display_name: None,
            role,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    fn store_with(account: &Account) -> Arc<FakeAccounts> {
        let mut store = FakeAccounts::default();
        store
            .accounts
            .insert(account.username.to_lowercase(), account.clone());
        Arc::new(store)
    }

    fn service_over(store: Arc<FakeAccounts>) -> AuthService {
        AuthService::new(
            store,
            Arc::new(PasswordHasher::new()),
            Arc::new(SessionCodec::new(&auth_config())),
        )
    }

    #[tokio::test]
    async fn test_login_issues_token_carrying_the_stored_identity() {
        let account = seeded_account("asmith", "hunter42x", Role::Admin);
        let service = service_over(store_with(&account));

        let outcome = service.login("asmith", "hunter42x").await.unwrap();
        assert_eq!(outcome.account.id, account.id);

        // The token decodes back to the stored account's identity.
        let claims = service.decode_session(&outcome.session.token).unwrap();
        assert_eq!(claims.sub, account.id);
        assert_eq!(claims.username, "asmith");
        assert_eq!(claims.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_login_records_the_successful_attempt() {
        let account = seeded_account("asmith", "hunter42x", Role::User);
        let store = store_with(&account);
        let service = service_over(store.clone());

        service.login("asmith", "hunter42x").await.unwrap();

        assert_eq!(*store.logins.lock().unwrap(), vec![account.id]);
    }

    #[tokio::test]
    async fn test_unknown_username_and_wrong_password_fail_identically() {
        let account = seeded_account("asmith", "hunter42x", Role::User);
        let store = store_with(&account);
        let service = service_over(store.clone());

        let unknown = service.login("nobody", "hunter42x").await.unwrap_err();
        let wrong = service.login("asmith", "wrong password").await.unwrap_err();

        assert_eq!(unknown.kind, ErrorKind::InvalidCredentials);
        assert_eq!(wrong.kind, ErrorKind::InvalidCredentials);
        assert_eq!(unknown.message, wrong.message);

        // Failed attempts never record a login.
        assert!(store.logins.lock().unwrap().is_empty());
    }
}

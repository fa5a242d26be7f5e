use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::identity::models::AuthResult;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::models::IdentityProfile;
use crate::domain::identity::models::LoginCommand;
use crate::domain::identity::models::RegisterCommand;
use crate::domain::identity::models::SessionToken;
use crate::identity::errors::AuthError;
use crate::identity::errors::CredentialStoreError;
use crate::identity::ports::AuthServicePort;
use crate::identity::ports::CredentialStore;
use crate::identity::ports::TokenIssuer;

/// Domain service implementation for authentication operations.
///
/// Stateless and request-scoped: holds only shared immutable handles, so all
/// operations may run concurrently for different callers without
/// coordination.
pub struct AuthService<CS, TI>
where
    CS: CredentialStore,
    TI: TokenIssuer,
{
    store: Arc<CS>,
    token_issuer: Arc<TI>,
    password_hasher: auth::PasswordHasher,
}

impl<CS, TI> AuthService<CS, TI>
where
    CS: CredentialStore,
    TI: TokenIssuer,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Credential persistence implementation
    /// * `token_issuer` - Session token signing implementation
    ///
    /// # Returns
    /// Configured auth service instance
    pub fn new(store: Arc<CS>, token_issuer: Arc<TI>) -> Self {
        Self {
            store,
            token_issuer,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    fn issue_token(&self, identity_id: &IdentityId) -> Result<SessionToken, AuthError> {
        self.token_issuer.issue(identity_id).map_err(|e| {
            tracing::error!(error = %e, %identity_id, "Session token signing failed");
            AuthError::Internal
        })
    }
}

#[async_trait]
impl<CS, TI> AuthServicePort for AuthService<CS, TI>
where
    CS: CredentialStore,
    TI: TokenIssuer,
{
    async fn register(&self, command: RegisterCommand) -> Result<AuthResult, AuthError> {
        // Hash before any persistence; the plaintext goes no further
        let password_hash = self.password_hasher.hash(&command.password).map_err(|e| {
            tracing::error!(error = %e, "Password hashing failed");
            AuthError::Internal
        })?;

        let identity = Identity {
            id: IdentityId::new(),
            email: command.email,
            password_hash,
            full_name: command.full_name,
            created_at: Utc::now(),
        };

        // Email uniqueness is the store's constraint, never pre-checked here
        let identity = self.store.insert(identity).await.map_err(|e| match e {
            CredentialStoreError::DuplicateEmail(email) => AuthError::EmailAlreadyExists(email),
            CredentialStoreError::Database(cause) => {
                tracing::error!(error = %cause, "Credential store insert failed");
                AuthError::Internal
            }
        })?;

        let token = self.issue_token(&identity.id)?;

        Ok(AuthResult {
            identity: IdentityProfile::from(&identity),
            token,
        })
    }

    async fn login(&self, command: LoginCommand) -> Result<AuthResult, AuthError> {
        let credentials = self
            .store
            .find_credentials_by_email(&command.email)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Credential store lookup failed");
                AuthError::Internal
            })?;

        // Unknown email and wrong password surface the same outward error;
        // the distinction exists only in operator logs
        let Some(credentials) = credentials else {
            tracing::debug!(email = %command.email, "Login rejected: unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        if !self
            .password_hasher
            .verify(&command.password, &credentials.password_hash)
        {
            tracing::debug!(identity_id = %credentials.id, "Login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.issue_token(&credentials.id)?;

        Ok(AuthResult {
            identity: IdentityProfile::from(&credentials),
            token,
        })
    }

    async fn reissue(&self, identity: IdentityProfile) -> Result<AuthResult, AuthError> {
        let token = self.issue_token(&identity.id)?;

        Ok(AuthResult { identity, token })
    }
}

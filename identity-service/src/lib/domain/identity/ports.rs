use async_trait::async_trait;

use crate::domain::identity::models::AuthResult;
use crate::domain::identity::models::EmailAddress;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::models::IdentityProfile;
use crate::domain::identity::models::LoginCommand;
use crate::domain::identity::models::RegisterCommand;
use crate::domain::identity::models::SessionToken;
use crate::domain::identity::models::StoredCredentials;
use crate::identity::errors::AuthError;
use crate::identity::errors::CredentialStoreError;
use crate::identity::errors::TokenError;

/// Port for authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new identity with hashed credentials.
    ///
    /// # Arguments
    /// * `command` - Validated command containing email, password, and profile
    ///
    /// # Returns
    /// AuthResult with the new identity's profile and a fresh session token
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Internal` - Hashing, persistence, or signing failed
    async fn register(&self, command: RegisterCommand) -> Result<AuthResult, AuthError>;

    /// Verify login credentials and issue a session token.
    ///
    /// # Arguments
    /// * `command` - Email and plaintext password to verify
    ///
    /// # Returns
    /// AuthResult with the identity's profile and a fresh session token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or password mismatch
    /// * `Internal` - Persistence or signing failed
    async fn login(&self, command: LoginCommand) -> Result<AuthResult, AuthError>;

    /// Issue a fresh session token for an already-authenticated identity.
    ///
    /// The caller is trusted to have resolved the identity from a valid prior
    /// token upstream; no storage lookup or credential comparison happens
    /// here.
    ///
    /// # Arguments
    /// * `identity` - Profile resolved by upstream request authentication
    ///
    /// # Returns
    /// AuthResult with the same profile and a fresh session token
    ///
    /// # Errors
    /// * `Internal` - Signing failed
    async fn reissue(&self, identity: IdentityProfile) -> Result<AuthResult, AuthError>;
}

/// Persistence operations for the identity aggregate.
///
/// The store owns the email uniqueness constraint; the service never
/// pre-checks existence, so concurrent registrations of the same email race
/// safely inside the store.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Persist a new identity in a single atomic write.
    ///
    /// # Arguments
    /// * `identity` - Identity record to create
    ///
    /// # Returns
    /// Created identity record
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email is already registered
    /// * `Database` - Persistence operation failed
    async fn insert(&self, identity: Identity) -> Result<Identity, CredentialStoreError>;

    /// Retrieve the credential projection for an email.
    ///
    /// Returns only the fields credential verification needs (id, email,
    /// password hash), never the full profile.
    ///
    /// # Arguments
    /// * `email` - Email address to look up
    ///
    /// # Returns
    /// Optional credential projection (None if not found)
    ///
    /// # Errors
    /// * `Database` - Persistence operation failed
    async fn find_credentials_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<StoredCredentials>, CredentialStoreError>;
}

/// Signing of session tokens from a minimal claim set.
pub trait TokenIssuer: Send + Sync + 'static {
    /// Sign a session token asserting the given identity.
    ///
    /// # Arguments
    /// * `identity_id` - Identity the token asserts
    ///
    /// # Returns
    /// Signed opaque session token
    ///
    /// # Errors
    /// * `SigningFailed` - Signature computation failed
    fn issue(&self, identity_id: &IdentityId) -> Result<SessionToken, TokenError>;
}

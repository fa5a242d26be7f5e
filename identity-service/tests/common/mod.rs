use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use identity_service::domain::identity::models::EmailAddress;
use identity_service::domain::identity::models::Identity;
use identity_service::domain::identity::models::SessionToken;
use identity_service::domain::identity::models::StoredCredentials;
use identity_service::domain::identity::service::AuthService;
use identity_service::identity::errors::CredentialStoreError;
use identity_service::identity::ports::CredentialStore;
use identity_service::outbound::token::JwtTokenIssuer;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TEST_JWT_VALIDITY_HOURS: i64 = 2;

/// In-memory credential store for exercising the service end to end.
///
/// Enforces the email uniqueness constraint the way a real store would:
/// inside the insert, not as a separate pre-check.
pub struct InMemoryCredentialStore {
    identities: Mutex<HashMap<String, Identity>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            identities: Mutex::new(HashMap::new()),
        }
    }

    pub fn count(&self) -> usize {
        self.identities.lock().unwrap().len()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn insert(&self, identity: Identity) -> Result<Identity, CredentialStoreError> {
        let mut identities = self.identities.lock().unwrap();

        if identities.contains_key(identity.email.as_str()) {
            return Err(CredentialStoreError::DuplicateEmail(
                identity.email.as_str().to_string(),
            ));
        }

        identities.insert(identity.email.as_str().to_string(), identity.clone());
        Ok(identity)
    }

    async fn find_credentials_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<StoredCredentials>, CredentialStoreError> {
        let identities = self.identities.lock().unwrap();

        Ok(identities.get(email.as_str()).map(|identity| {
            StoredCredentials {
                id: identity.id,
                email: identity.email.clone(),
                password_hash: identity.password_hash.clone(),
            }
        }))
    }
}

/// Build a service wired to a fresh in-memory store and a real JWT issuer.
pub fn test_service() -> (
    AuthService<InMemoryCredentialStore, JwtTokenIssuer>,
    Arc<InMemoryCredentialStore>,
) {
    let store = Arc::new(InMemoryCredentialStore::new());
    let issuer = Arc::new(JwtTokenIssuer::new(TEST_JWT_SECRET, TEST_JWT_VALIDITY_HOURS));
    let service = AuthService::new(Arc::clone(&store), issuer);

    (service, store)
}

/// Decode an issued token with the test secret.
pub fn decode_claims(token: &SessionToken) -> auth::Claims {
    auth::JwtHandler::new(TEST_JWT_SECRET)
        .decode(token.as_str())
        .expect("Failed to decode issued token")
}

pub fn email(raw: &str) -> EmailAddress {
    EmailAddress::new(raw.to_string()).expect("Failed to parse test email")
}

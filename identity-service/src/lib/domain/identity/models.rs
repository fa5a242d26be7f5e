use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::identity::errors::EmailError;
use crate::identity::errors::IdentityIdError;

/// Identity aggregate entity.
///
/// The durable representation of a registered account, as the credential
/// store holds it. This is the only type that carries the password hash; it
/// never crosses the service boundary outward.
#[derive(Debug, Clone)]
pub struct Identity {
    pub id: IdentityId,
    pub email: EmailAddress,
    pub password_hash: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
}

/// Identity unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityId(pub Uuid);

impl IdentityId {
    /// Generate a new random identity ID.
    ///
    /// # Returns
    /// IdentityId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identity ID from string.
    ///
    /// # Arguments
    /// * `s` - UUID string to parse
    ///
    /// # Returns
    /// Parsed IdentityId
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, IdentityIdError> {
        Uuid::parse_str(s)
            .map(IdentityId)
            .map_err(|e| IdentityIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. The store keys
/// identities by this value, case-sensitive as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Arguments
    /// * `email` - Raw email string
    ///
    /// # Returns
    /// Validated EmailAddress value object
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    ///
    /// # Returns
    /// Email string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Narrow credential projection fetched on the login path.
///
/// Only the fields credential verification needs; the full profile is never
/// fetched or logged to check a password.
#[derive(Debug, Clone)]
pub struct StoredCredentials {
    pub id: IdentityId,
    pub email: EmailAddress,
    pub password_hash: String,
}

/// Outward-facing identity attributes.
///
/// Structurally hash-free: there is no password field to strip, so no code
/// path can leak one. `full_name` is absent when the operation that produced
/// the profile never fetched it (login works from `StoredCredentials`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityProfile {
    pub id: IdentityId,
    pub email: EmailAddress,
    pub full_name: Option<String>,
}

impl From<&Identity> for IdentityProfile {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id,
            email: identity.email.clone(),
            full_name: Some(identity.full_name.clone()),
        }
    }
}

impl From<&StoredCredentials> for IdentityProfile {
    fn from(credentials: &StoredCredentials) -> Self {
        Self {
            id: credentials.id,
            email: credentials.email.clone(),
            full_name: None,
        }
    }
}

/// Opaque signed session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a signed token string.
    pub fn new(token: String) -> Self {
        Self(token)
    }

    /// Get the token as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Successful authentication outcome: who, plus a fresh session token.
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub identity: IdentityProfile,
    pub token: SessionToken,
}

/// Command to register a new identity with domain types
#[derive(Debug)]
pub struct RegisterCommand {
    pub email: EmailAddress,
    pub password: String,
    pub full_name: String,
}

impl RegisterCommand {
    /// Construct a new register command.
    ///
    /// # Arguments
    /// * `email` - Validated email address
    /// * `password` - Plain text password (hashed by the service, then dropped)
    /// * `full_name` - Profile attribute, opaque to the core
    ///
    /// # Returns
    /// RegisterCommand with validated fields
    pub fn new(email: EmailAddress, password: String, full_name: String) -> Self {
        Self {
            email,
            password,
            full_name,
        }
    }
}

/// Command to verify login credentials
#[derive(Debug)]
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: String,
}

impl LoginCommand {
    /// Construct a new login command.
    ///
    /// # Arguments
    /// * `email` - Validated email address
    /// * `password` - Plain text password to verify
    pub fn new(email: EmailAddress, password: String) -> Self {
        Self { email, password }
    }
}

use thiserror::Error;

/// Error for IdentityId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Errors reported by a credential store implementation.
///
/// The two variants matter to callers in different ways: a duplicate email is
/// a client-correctable conflict, everything else is an infrastructure fault.
#[derive(Debug, Clone, Error)]
pub enum CredentialStoreError {
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Credential store failure: {0}")]
    Database(String),
}

/// Error for session token signing failures
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Token signing failed: {0}")]
    SigningFailed(String),
}

/// Top-level error for authentication operations.
///
/// Callers must handle each case; the variants are the whole outward error
/// surface of the service.
///
/// `Internal` deliberately carries no cause: the underlying failure is logged
/// server-side where it occurs, and the caller only ever sees the generic
/// message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Duplicate unique field at registration, carrying the conflicting email.
    #[error("Email already registered: {0}")]
    EmailAlreadyExists(String),

    /// Unknown identity or credential mismatch; a single undifferentiated
    /// message for both.
    #[error("Credentials are not valid")]
    InvalidCredentials,

    /// Unexpected storage, hashing, or signing failure.
    #[error("Internal error, check server logs")]
    Internal,
}

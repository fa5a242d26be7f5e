use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Session token claim set.
///
/// Deliberately minimal: the subject is the identity being asserted, and
/// iat/exp bound the validity window. Anything else a caller wants to know
/// about an identity is looked up from the store, not read out of the token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (identity identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims asserting an identity, expiring after the given window.
    ///
    /// # Arguments
    /// * `identity_id` - Unique identity identifier
    /// * `validity_hours` - Hours until the token expires
    ///
    /// # Returns
    /// Claims with sub, iat, and exp set
    pub fn for_identity(identity_id: impl ToString, validity_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(validity_hours);

        Self {
            sub: identity_id.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check if the claim set is expired at the given instant.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

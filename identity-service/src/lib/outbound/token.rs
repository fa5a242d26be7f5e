use auth::Claims;
use auth::JwtHandler;

use crate::config::JwtConfig;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::models::SessionToken;
use crate::identity::errors::TokenError;
use crate::identity::ports::TokenIssuer;

/// JWT-backed session token issuer.
///
/// Signs a minimal claim set (sub, iat, exp) with the process-wide secret.
/// The secret and validity window are fixed at construction and immutable for
/// the lifetime of the process.
pub struct JwtTokenIssuer {
    jwt_handler: JwtHandler,
    validity_hours: i64,
}

impl JwtTokenIssuer {
    /// Create a new issuer.
    ///
    /// # Arguments
    /// * `secret` - Secret key for HS256 signing
    /// * `validity_hours` - Hours until issued tokens expire
    pub fn new(secret: &[u8], validity_hours: i64) -> Self {
        Self {
            jwt_handler: JwtHandler::new(secret),
            validity_hours,
        }
    }

    /// Create a new issuer from loaded configuration.
    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(config.secret.as_bytes(), config.expiration_hours)
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, identity_id: &IdentityId) -> Result<SessionToken, TokenError> {
        let claims = Claims::for_identity(identity_id, self.validity_hours);

        self.jwt_handler
            .encode(&claims)
            .map(SessionToken::new)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }
}

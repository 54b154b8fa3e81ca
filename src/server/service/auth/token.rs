use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    model::auth::IdentityKind,
    server::{error::auth::AuthError, error::Error, model::auth::TokenClaims},
};

/// Token lifetime used when none is configured
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// HS256 signing & verification keys along with the lifetime of issued tokens
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_hours: i64,
}

impl TokenKeys {
    /// Creates keys from the shared secret, tokens expire `ttl_hours` after issuance
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_hours,
        }
    }

    /// Signs a token for the identity, issued at `now`
    ///
    /// # Arguments
    /// - `id` - Candidate or company ID, becomes the `sub` claim
    /// - `kind` - Which identity table the ID belongs to
    /// - `email` - Email of the identity
    /// - `now` - Issuance instant, expiry is `now` plus the configured lifetime
    ///
    /// # Returns
    /// - `Ok(String)` - Signed token
    /// - `Err(Error::InternalError)` - The lifetime pushes the expiry out of the representable range
    /// - `Err(Error::TokenError)` - Signing failed
    pub fn issue(
        &self,
        id: i32,
        kind: IdentityKind,
        email: &str,
        now: DateTime<Utc>,
    ) -> Result<String, Error> {
        let expires_at = TimeDelta::try_hours(self.ttl_hours)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Token lifetime of {} hours overflows the expiry timestamp",
                    self.ttl_hours
                ))
            })?;

        let claims = TokenClaims {
            sub: id,
            kind,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Verifies the token's signature and that it has not expired as of `now`
    ///
    /// Expiry is compared against the provided clock rather than the system clock so the
    /// check has no leeway and is deterministic.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        let claims = decode::<TokenClaims>(token, &self.decoding, &validation)
            .map_err(|err| {
                tracing::debug!(error = %err, "Rejected bearer token");
                AuthError::InvalidToken
            })?
            .claims;

        if claims.exp <= now.timestamp() {
            tracing::debug!(sub = claims.sub, "Rejected expired bearer token");
            return Err(AuthError::InvalidToken);
        }

        Ok(claims)
    }
}

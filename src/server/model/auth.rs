use serde::{Deserialize, Serialize};

use crate::model::auth::IdentityKind;

/// Claims signed into every bearer token
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// ID of the candidate or company the token was issued to
    pub sub: i32,
    pub kind: IdentityKind,
    pub email: String,
    /// Issued at, seconds since the unix epoch
    pub iat: i64,
    /// Expiry, seconds since the unix epoch
    pub exp: i64,
}

/// Identity asserted by a verified bearer token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthIdentity {
    pub id: i32,
    pub kind: IdentityKind,
}

impl From<&TokenClaims> for AuthIdentity {
    fn from(claims: &TokenClaims) -> Self {
        Self {
            id: claims.sub,
            kind: claims.kind,
        }
    }
}

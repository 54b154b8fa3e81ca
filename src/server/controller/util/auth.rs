use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use chrono::Utc;

use crate::{
    model::auth::IdentityKind,
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, auth::AuthIdentity},
    },
};

/// ID of the candidate authenticated by the request's bearer token
pub struct CandidateAuth(pub i32);

/// ID of the company authenticated by the request's bearer token
pub struct CompanyAuth(pub i32);

/// Extracts the token from an `Authorization: Bearer <token>` header
///
/// # Returns
/// - `Ok(&str)` - The raw token
/// - `Err(AuthError::Unauthenticated)` - Header missing, not UTF-8, or not a bearer credential
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::Unauthenticated)?;

    let (scheme, token) = value
        .split_once(' ')
        .ok_or(AuthError::Unauthenticated)?;

    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("Bearer") || token.is_empty() {
        return Err(AuthError::Unauthenticated);
    }

    Ok(token)
}

impl FromRequestParts<AppState> for AuthIdentity {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;
        let claims = state.tokens.verify(token, Utc::now())?;

        Ok(AuthIdentity::from(&claims))
    }
}

impl FromRequestParts<AppState> for CandidateAuth {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let identity = AuthIdentity::from_request_parts(parts, state).await?;

        match identity.kind {
            IdentityKind::Candidate => Ok(Self(identity.id)),
            IdentityKind::Company => Err(AuthError::WrongIdentityKind.into()),
        }
    }
}

impl FromRequestParts<AppState> for CompanyAuth {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let identity = AuthIdentity::from_request_parts(parts, state).await?;

        match identity.kind {
            IdentityKind::Company => Ok(Self(identity.id)),
            IdentityKind::Candidate => Err(AuthError::WrongIdentityKind.into()),
        }
    }
}

/// Fails unless the authenticated identity is the owner of the addressed resource
pub fn require_owner(subject: i32, owner: i32) -> Result<(), AuthError> {
    if subject != owner {
        return Err(AuthError::NotResourceOwner { subject, owner });
    }

    Ok(())
}

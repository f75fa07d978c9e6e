use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::{header, request::Parts},
};
use uuid::Uuid;

use crate::{
    adapters::state::AppState,
    application::error::ApplicationError,
    domain::models::user::Tier,
};

/// Authenticated caller, decoded from the `Authorization: Bearer` session
/// token. Required on most routes; the download route takes it as
/// `Option<Session>` so public files stay reachable without one.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: Uuid,
    pub email: String,
    pub tier: Tier,
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

impl FromRequestParts<AppState> for Session {
    type Rejection = ApplicationError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(ApplicationError::Unauthenticated)?;
        let claims = state.session_signer.decode(token)?;

        let user_id =
            Uuid::parse_str(&claims.sub).map_err(|_| ApplicationError::Unauthenticated)?;

        Ok(Session {
            user_id,
            email: claims.email,
            tier: claims.tier,
        })
    }
}

impl OptionalFromRequestParts<AppState> for Session {
    type Rejection = ApplicationError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        if bearer_token(parts).is_none() {
            return Ok(None);
        }

        // An invalid token on an optional route reads as anonymous.
        Ok(
            <Session as FromRequestParts<AppState>>::from_request_parts(parts, state)
                .await
                .ok(),
        )
    }
}

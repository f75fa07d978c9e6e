use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::{
    adapters::{
        dto::auth_dto::{LoginRequest, RegisterRequest, SessionResponse, SessionUser},
        state::AppState,
    },
    application::{dto::user_dto::NewUserAccount, error::ApplicationError},
    services::{hash_password, verify_password},
};

const MIN_PASSWORD_LENGTH: usize = 8;

pub struct AuthController;

impl AuthController {
    /// POST /api/auth/register
    pub async fn register(
        State(app_state): State<AppState>,
        Json(body): Json<RegisterRequest>,
    ) -> Result<(StatusCode, Json<SessionUser>), ApplicationError> {
        if !body.email.contains('@') {
            return Err(ApplicationError::Validation(
                "a valid email address is required".to_string(),
            ));
        }
        if body.password.len() < MIN_PASSWORD_LENGTH {
            return Err(ApplicationError::Validation(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let password_hash = hash_password(&body.password)?;

        let account = app_state
            .user_repository
            .create(NewUserAccount {
                email: body.email,
                password_hash: Some(password_hash),
                google_id: None,
            })
            .await?;

        info!("account registered: {}", account.id);

        Ok((StatusCode::CREATED, Json(SessionUser::from(account))))
    }

    /// POST /api/auth/login. Unknown email, missing credential hash and
    /// wrong password all collapse into the same 401.
    pub async fn login(
        State(app_state): State<AppState>,
        Json(body): Json<LoginRequest>,
    ) -> Result<Json<SessionResponse>, ApplicationError> {
        let account = app_state
            .user_repository
            .find_by_email(&body.email)
            .await
            .map_err(|e| match e {
                ApplicationError::NotFound => ApplicationError::Unauthenticated,
                other => other,
            })?;

        let stored_hash = account
            .password_hash
            .as_deref()
            .ok_or(ApplicationError::Unauthenticated)?;

        if !verify_password(&body.password, stored_hash) {
            return Err(ApplicationError::Unauthenticated);
        }

        let token = app_state.session_signer.issue(&account)?;

        Ok(Json(SessionResponse {
            token,
            user: SessionUser::from(account),
        }))
    }
}

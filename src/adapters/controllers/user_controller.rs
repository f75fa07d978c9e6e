use axum::{extract::State, Json};

use crate::{
    adapters::{dto::user_dto::ProfileResponse, extract::Session, state::AppState},
    application::error::ApplicationError,
};

pub struct UserController;

impl UserController {
    /// GET /api/user — tier and usage for the signed-in account. Reads
    /// the account row rather than the session claims so a fresh upgrade
    /// shows up without re-login.
    pub async fn profile(
        State(app_state): State<AppState>,
        session: Session,
    ) -> Result<Json<ProfileResponse>, ApplicationError> {
        let account = app_state.user_repository.find_by_id(session.user_id).await?;
        let file_count = app_state
            .file_repository
            .count_by_owner(session.user_id)
            .await?;

        Ok(Json(ProfileResponse {
            tier: account.tier,
            file_count,
        }))
    }
}

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::warn;

use crate::adapters::state::AppState;

pub struct ShareController;

impl ShareController {
    /// GET /s/{share_id} — resolve a public share token to the download
    /// endpoint. Only public records match; anything else lands on the
    /// not-found page rather than an error body.
    pub async fn resolve(
        State(app_state): State<AppState>,
        Path(share_id): Path<String>,
    ) -> Redirect {
        match app_state.file_repository.find_by_share_id(&share_id).await {
            Ok(file) => Redirect::temporary(&format!("/api/files/{}", file.id)),
            Err(_) => {
                warn!("share token did not resolve to a public file");
                Redirect::temporary("/404")
            }
        }
    }
}

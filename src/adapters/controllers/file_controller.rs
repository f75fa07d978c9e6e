use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    adapters::{
        dto::file_dto::{CreateFileRequest, FileResponse, ShareLinkResponse},
        extract::Session,
        state::AppState,
    },
    application::{dto::file_dto::NewFileRecord, error::ApplicationError},
    domain::{models::file::FileType, policy::access},
    services::{attachment_disposition, generate_share_token},
};

pub struct FileController;

impl FileController {
    /// GET /api/files — the caller's records, newest first.
    pub async fn list_files(
        State(app_state): State<AppState>,
        session: Session,
    ) -> Result<Json<Vec<FileResponse>>, ApplicationError> {
        let files = app_state
            .file_repository
            .list_by_owner(session.user_id)
            .await?;

        Ok(Json(files.into_iter().map(FileResponse::from).collect()))
    }

    /// POST /api/files — record an upload the client already pushed to
    /// the CDN. Rejects unknown file types and over-quota owners.
    pub async fn create_file(
        State(app_state): State<AppState>,
        session: Session,
        Json(body): Json<CreateFileRequest>,
    ) -> Result<(StatusCode, Json<FileResponse>), ApplicationError> {
        let file_type = FileType::parse(&body.file_type).ok_or_else(|| {
            ApplicationError::Validation(format!("Invalid file type '{}'", body.file_type))
        })?;

        // The session's tier claim can be stale after an upgrade, so the
        // account row is authoritative here.
        let account = app_state.user_repository.find_by_id(session.user_id).await?;
        let current_count = app_state
            .file_repository
            .count_by_owner(session.user_id)
            .await?;

        let quota = app_state.config.quota;
        if !quota.can_upload(current_count, account.tier) {
            return Err(ApplicationError::QuotaExceeded {
                limit: quota.limit_for(account.tier),
                tier: account.tier,
            });
        }

        // Count and insert are not one transaction; the quota is a soft
        // limit and concurrent uploads at the boundary may briefly pass it.
        let record = app_state
            .file_repository
            .create(NewFileRecord {
                owner_id: session.user_id,
                name: body.name,
                url: body.url,
                thumbnail_url: body.thumbnail_url,
                file_type,
                size: body.size,
                file_extension: body.file_extension,
            })
            .await?;

        info!("file {} recorded for owner {}", record.id, record.owner_id);

        Ok((StatusCode::CREATED, Json(FileResponse::from(record))))
    }

    /// GET /api/files/{id} — proxy the stored bytes from their origin,
    /// forced as a download under the record's display name. Works
    /// without a session for public files.
    pub async fn download_file(
        State(app_state): State<AppState>,
        session: Option<Session>,
        Path(file_id): Path<Uuid>,
    ) -> Result<Response, ApplicationError> {
        let file = app_state.file_repository.find_by_id(file_id).await?;

        let requester = session.map(|s| s.user_id);
        if !access::can_read(&file, requester) {
            return Err(ApplicationError::Forbidden(
                "You are not allowed to access this file".to_string(),
            ));
        }

        let upstream = app_state.origin_client.fetch(&file.url).await?;

        let mut builder = Response::builder().status(StatusCode::OK);
        if let Some(content_type) = upstream.headers().get(header::CONTENT_TYPE) {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        if let Some(content_length) = upstream.headers().get(header::CONTENT_LENGTH) {
            builder = builder.header(header::CONTENT_LENGTH, content_length);
        }

        // If the client disconnects mid-stream the body is simply dropped;
        // nothing else was mutated on the way here.
        builder
            .header(header::CONTENT_DISPOSITION, attachment_disposition(&file.name))
            .body(Body::from_stream(upstream.bytes_stream()))
            .map_err(|e| ApplicationError::InternalError(e.to_string()))
    }

    /// DELETE /api/files/{id}. A record that exists but belongs to someone
    /// else is indistinguishable from one that does not exist.
    pub async fn delete_file(
        State(app_state): State<AppState>,
        session: Session,
        Path(file_id): Path<Uuid>,
    ) -> Result<StatusCode, ApplicationError> {
        let file = app_state.file_repository.find_by_id(file_id).await?;

        if !access::can_delete(&file, Some(session.user_id)) {
            return Err(ApplicationError::NotFound);
        }

        app_state.file_repository.delete_by_id(file.id).await?;

        info!("file {} deleted by owner {}", file.id, session.user_id);

        Ok(StatusCode::NO_CONTENT)
    }

    /// POST /api/files/{id}/share — owner-only. Issues the share token on
    /// first call and reuses it forever after, so the public URL is stable.
    pub async fn share_file(
        State(app_state): State<AppState>,
        session: Session,
        Path(file_id): Path<Uuid>,
    ) -> Result<Json<ShareLinkResponse>, ApplicationError> {
        let file = app_state.file_repository.find_by_id(file_id).await?;

        if !access::can_delete(&file, Some(session.user_id)) {
            return Err(ApplicationError::NotFound);
        }

        let token = match file.share_id {
            Some(existing) => existing,
            None => generate_share_token(),
        };

        // The store keeps whichever token was persisted first, so a racing
        // second issuance still comes back with the original one.
        let stored = app_state.file_repository.set_share(file.id, &token).await?;
        let token = stored.share_id.ok_or_else(|| {
            ApplicationError::InternalError("share token missing after issuance".to_string())
        })?;

        let share_url = format!(
            "{}/s/{}",
            app_state.config.public_base_url.trim_end_matches('/'),
            token
        );

        Ok(Json(ShareLinkResponse { share_url }))
    }
}

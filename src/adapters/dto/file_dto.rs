use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::file::{FileRecord, FileType};

/// Body of POST /api/files. The client has already pushed the bytes to
/// the CDN; this only records where they landed. `file_type` arrives as
/// a raw string so the handler can reject unknown values with a 400
/// instead of a deserialization error.
#[derive(Debug, Deserialize)]
pub struct CreateFileRequest {
    pub name: String,
    pub url: String,
    pub size: u64,
    #[serde(rename = "fileType")]
    pub file_type: String,
    #[serde(rename = "fileExtension")]
    pub file_extension: Option<String>,
    #[serde(rename = "thumbnailUrl")]
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FileResponse {
    pub id: Uuid,
    #[serde(rename = "ownerId")]
    pub owner_id: Uuid,
    pub name: String,
    pub url: String,
    #[serde(rename = "thumbnailUrl", skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(rename = "fileType")]
    pub file_type: FileType,
    pub size: u64,
    #[serde(rename = "fileExtension", skip_serializing_if = "Option::is_none")]
    pub file_extension: Option<String>,
    #[serde(rename = "isPublic")]
    pub is_public: bool,
    #[serde(rename = "shareId", skip_serializing_if = "Option::is_none")]
    pub share_id: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<FileRecord> for FileResponse {
    fn from(record: FileRecord) -> Self {
        Self {
            id: record.id,
            owner_id: record.owner_id,
            name: record.name,
            url: record.url,
            thumbnail_url: record.thumbnail_url,
            file_type: record.file_type,
            size: record.size,
            file_extension: record.file_extension,
            is_public: record.is_public,
            share_id: record.share_id,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ShareLinkResponse {
    #[serde(rename = "shareUrl")]
    pub share_url: String,
}

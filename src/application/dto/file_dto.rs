use uuid::Uuid;

use crate::domain::models::file::FileType;

/// Input for `FileRepository::create`. `file_type` has already been
/// validated at the edge; the store never sees a raw string.
#[derive(Debug, Clone)]
pub struct NewFileRecord {
    pub owner_id: Uuid,
    pub name: String,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub file_type: FileType,
    pub size: u64,
    pub file_extension: Option<String>,
}

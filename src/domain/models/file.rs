use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Discriminant for the single tagged record shape served by every file
/// endpoint. Anything outside this set is rejected at the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Image,
    Video,
    Document,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Image => "image",
            FileType::Video => "video",
            FileType::Document => "document",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "image" => Some(FileType::Image),
            "video" => Some(FileType::Video),
            "document" => Some(FileType::Document),
            _ => None,
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for one uploaded object. The bytes themselves live at `url`
/// on the external CDN; this record only tracks ownership and visibility.
///
/// `share_id` is assigned lazily on first share issuance and never
/// regenerated afterwards. `is_public` flips true only together with it.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub file_type: FileType,
    pub size: u64,
    pub file_extension: Option<String>,
    pub is_public: bool,
    pub share_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

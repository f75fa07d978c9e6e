use serde::Serialize;

use crate::domain::models::user::Tier;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub tier: Tier,
    #[serde(rename = "fileCount")]
    pub file_count: u64,
}

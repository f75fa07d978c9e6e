use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    application::{dto::file_dto::NewFileRecord, error::ApplicationError},
    domain::models::file::FileRecord,
};

#[async_trait]
pub trait FileRepository: Send + Sync {
    async fn create(&self, new_file: NewFileRecord) -> Result<FileRecord, ApplicationError>;
    async fn find_by_id(&self, id: Uuid) -> Result<FileRecord, ApplicationError>;
    /// Resolves a share token. Only records that are actually public match;
    /// a stale token on a non-public record behaves as not-found.
    async fn find_by_share_id(&self, share_id: &str) -> Result<FileRecord, ApplicationError>;
    /// Newest first.
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<FileRecord>, ApplicationError>;
    async fn count_by_owner(&self, owner_id: Uuid) -> Result<u64, ApplicationError>;
    /// Unconditional at this layer; callers must check ownership first.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), ApplicationError>;
    /// Marks the record public and stores `share_id` unless one is already
    /// set. The stored row wins, so repeated issuance keeps the first token.
    async fn set_share(&self, id: Uuid, share_id: &str) -> Result<FileRecord, ApplicationError>;
}

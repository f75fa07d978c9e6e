use uuid::Uuid;

use crate::domain::models::file::FileRecord;

/// Anyone may read a public file; otherwise only the owner.
pub fn can_read(file: &FileRecord, requester: Option<Uuid>) -> bool {
    file.is_public || requester == Some(file.owner_id)
}

/// Only the owner may delete or share. Public visibility grants read
/// access, nothing more.
pub fn can_delete(file: &FileRecord, requester: Option<Uuid>) -> bool {
    requester == Some(file.owner_id)
}

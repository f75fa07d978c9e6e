use async_trait::async_trait;
use sqlx::{postgres::PgRow, query_as, FromRow, Row};
use uuid::Uuid;

use crate::{
    application::{
        dto::file_dto::NewFileRecord, error::ApplicationError,
        repositories::file_repository::FileRepository,
    },
    domain::models::file::{FileRecord, FileType},
};

pub struct PgFileRepository {
    pool: sqlx::PgPool,
}

impl PgFileRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

struct FileRow(FileRecord);

impl FromRow<'_, PgRow> for FileRow {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        let size: i64 = row.try_get("size")?;
        let file_type: String = row.try_get("file_type")?;
        let file_type = FileType::parse(&file_type).ok_or_else(|| sqlx::Error::ColumnDecode {
            index: "file_type".to_string(),
            source: format!("unknown file type '{}'", file_type).into(),
        })?;

        Ok(FileRow(FileRecord {
            id: row.try_get("id")?,
            owner_id: row.try_get("owner_id")?,
            name: row.try_get("name")?,
            url: row.try_get("url")?,
            thumbnail_url: row.try_get("thumbnail_url")?,
            file_type,
            size: size.max(0) as u64,
            file_extension: row.try_get("file_extension")?,
            is_public: row.try_get("is_public")?,
            share_id: row.try_get("share_id")?,
            created_at: row.try_get("created_at")?,
        }))
    }
}

fn db_error(e: sqlx::Error) -> ApplicationError {
    ApplicationError::DatabaseError(e.to_string())
}

#[async_trait]
impl FileRepository for PgFileRepository {
    async fn create(&self, new_file: NewFileRecord) -> Result<FileRecord, ApplicationError> {
        let query = r#"
            INSERT INTO files (owner_id, name, url, thumbnail_url, file_type, size, file_extension)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
        "#;

        let created: FileRow = query_as(query)
            .bind(new_file.owner_id)
            .bind(&new_file.name)
            .bind(&new_file.url)
            .bind(&new_file.thumbnail_url)
            .bind(new_file.file_type.as_str())
            .bind(new_file.size.min(i64::MAX as u64) as i64)
            .bind(&new_file.file_extension)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(created.0)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<FileRecord, ApplicationError> {
        let fetched: Option<FileRow> = query_as("SELECT * FROM files WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;

        fetched.map(|row| row.0).ok_or(ApplicationError::NotFound)
    }

    async fn find_by_share_id(&self, share_id: &str) -> Result<FileRecord, ApplicationError> {
        let fetched: Option<FileRow> =
            query_as("SELECT * FROM files WHERE share_id = $1 AND is_public = TRUE")
                .bind(share_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;

        fetched.map(|row| row.0).ok_or(ApplicationError::NotFound)
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<FileRecord>, ApplicationError> {
        let rows: Vec<FileRow> =
            query_as("SELECT * FROM files WHERE owner_id = $1 ORDER BY created_at DESC")
                .bind(owner_id)
                .fetch_all(&self.pool)
                .await
                .map_err(db_error)?;

        Ok(rows.into_iter().map(|row| row.0).collect())
    }

    async fn count_by_owner(&self, owner_id: Uuid) -> Result<u64, ApplicationError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM files WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(count.max(0) as u64)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), ApplicationError> {
        let result = sqlx::query("DELETE FROM files WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(ApplicationError::NotFound);
        }

        Ok(())
    }

    async fn set_share(&self, id: Uuid, share_id: &str) -> Result<FileRecord, ApplicationError> {
        // COALESCE keeps the first token ever written, which makes
        // issuance idempotent even under concurrent share requests.
        let query = r#"
            UPDATE files
            SET is_public = TRUE,
                share_id = COALESCE(share_id, $2)
            WHERE id = $1
            RETURNING *
        "#;

        let updated: Option<FileRow> = query_as(query)
            .bind(id)
            .bind(share_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;

        updated.map(|row| row.0).ok_or(ApplicationError::NotFound)
    }
}

use async_trait::async_trait;
use sqlx::{postgres::PgRow, query_as, FromRow, Row};
use uuid::Uuid;

use crate::{
    application::{
        dto::user_dto::NewUserAccount, error::ApplicationError,
        repositories::user_repository::UserRepository,
    },
    domain::models::user::{Tier, UserAccount},
};

pub struct PgUserRepository {
    pool: sqlx::PgPool,
}

impl PgUserRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

struct UserRow(UserAccount);

impl FromRow<'_, PgRow> for UserRow {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        let tier: String = row.try_get("tier")?;
        let tier = Tier::parse(&tier).ok_or_else(|| sqlx::Error::ColumnDecode {
            index: "tier".to_string(),
            source: format!("unknown tier '{}'", tier).into(),
        })?;

        Ok(UserRow(UserAccount {
            id: row.try_get("id")?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
            google_id: row.try_get("google_id")?,
            tier,
            created_at: row.try_get("created_at")?,
        }))
    }
}

fn db_error(e: sqlx::Error) -> ApplicationError {
    ApplicationError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewUserAccount) -> Result<UserAccount, ApplicationError> {
        let query = r#"
            INSERT INTO users (email, password_hash, google_id)
            VALUES ($1, $2, $3)
            RETURNING *
        "#;

        let created: UserRow = query_as(query)
            .bind(&new_user.email)
            .bind(&new_user.password_hash)
            .bind(&new_user.google_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    ApplicationError::Validation("email already registered".to_string())
                }
                _ => db_error(e),
            })?;

        Ok(created.0)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<UserAccount, ApplicationError> {
        let fetched: Option<UserRow> = query_as("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;

        fetched.map(|row| row.0).ok_or(ApplicationError::NotFound)
    }

    async fn find_by_email(&self, email: &str) -> Result<UserAccount, ApplicationError> {
        let fetched: Option<UserRow> = query_as("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;

        fetched.map(|row| row.0).ok_or(ApplicationError::NotFound)
    }

    async fn set_tier(&self, email: &str, tier: Tier) -> Result<UserAccount, ApplicationError> {
        let updated: Option<UserRow> =
            query_as("UPDATE users SET tier = $2 WHERE email = $1 RETURNING *")
                .bind(email)
                .bind(tier.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;

        updated.map(|row| row.0).ok_or(ApplicationError::NotFound)
    }
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    application::{dto::user_dto::NewUserAccount, error::ApplicationError},
    domain::models::user::{Tier, UserAccount},
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, new_user: NewUserAccount) -> Result<UserAccount, ApplicationError>;
    async fn find_by_id(&self, id: Uuid) -> Result<UserAccount, ApplicationError>;
    async fn find_by_email(&self, email: &str) -> Result<UserAccount, ApplicationError>;
    async fn set_tier(&self, email: &str, tier: Tier) -> Result<UserAccount, ApplicationError>;
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::user::{Tier, UserAccount};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
    pub tier: Tier,
}

impl From<UserAccount> for SessionUser {
    fn from(account: UserAccount) -> Self {
        Self {
            id: account.id,
            email: account.email,
            tier: account.tier,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: SessionUser,
}

use crate::domain::models::user::Tier;

#[derive(Debug)]
pub enum ApplicationError {
    NotFound,
    Unauthenticated,
    Forbidden(String),
    QuotaExceeded { limit: u64, tier: Tier },
    Validation(String),
    Upstream(String),
    DatabaseError(String),
    InternalError(String),
}

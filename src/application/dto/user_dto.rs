/// Input for `UserRepository::create`. Exactly one of `password_hash`
/// and `google_id` is expected; credential accounts carry the former.
#[derive(Debug, Clone)]
pub struct NewUserAccount {
    pub email: String,
    pub password_hash: Option<String>,
    pub google_id: Option<String>,
}

mod pg_file_repository;
mod pg_user_repository;

pub use pg_file_repository::PgFileRepository;
pub use pg_user_repository::PgUserRepository;

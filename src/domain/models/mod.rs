pub mod file;
pub mod payment;
pub mod user;

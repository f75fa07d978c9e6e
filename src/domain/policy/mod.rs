pub mod access;
pub mod quota;

pub mod auth_controller;
pub mod file_controller;
pub mod payment_controller;
pub mod share_controller;
pub mod user_controller;

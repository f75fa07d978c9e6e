use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::adapters::{
    controllers::{
        auth_controller::AuthController, file_controller::FileController,
        payment_controller::PaymentController, share_controller::ShareController,
        user_controller::UserController,
    },
    state::AppState,
};

/// Route paths are load-bearing: existing clients and issued share links
/// depend on them staying exactly as they are.
pub fn build_router(state: AppState) -> Router {
    let cors = match &state.config.cors_allowed_origins {
        Some(allowed_origins) => {
            let origins: Vec<_> = allowed_origins
                .iter()
                .map(|s| s.parse().expect("Invalid CORS origin"))
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        // Allow all origins if not specified (only for development)
        None => CorsLayer::permissive(),
    };

    Router::new()
        .route("/api/auth/register", post(AuthController::register))
        .route("/api/auth/login", post(AuthController::login))
        .route("/api/user", get(UserController::profile))
        .route(
            "/api/files",
            get(FileController::list_files).post(FileController::create_file),
        )
        .route(
            "/api/files/{id}",
            get(FileController::download_file).delete(FileController::delete_file),
        )
        .route("/api/files/{id}/share", post(FileController::share_file))
        .route("/s/{share_id}", get(ShareController::resolve))
        .route("/api/payment", post(PaymentController::create_order))
        .route("/api/verifyPayment", post(PaymentController::verify_payment))
        .route("/api/upgrade", post(PaymentController::upgrade))
        .layer(cors)
        .with_state(state)
}

use axum::extract::FromRef;
use std::sync::Arc;

use crate::{
    application::{
        repositories::{file_repository::FileRepository, user_repository::UserRepository},
        services::PaymentGateway,
    },
    domain::config::AppConfig,
    services::{OriginClient, PaymentVerifier, SessionSigner},
};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub user_repository: Arc<dyn UserRepository>,
    pub file_repository: Arc<dyn FileRepository>,
    pub payment_gateway: Arc<dyn PaymentGateway>,
    pub payment_verifier: Arc<PaymentVerifier>,
    pub session_signer: Arc<SessionSigner>,
    pub origin_client: OriginClient,
}

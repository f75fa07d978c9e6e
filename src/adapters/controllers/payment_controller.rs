use axum::{extract::State, Json};
use chrono::Utc;
use tracing::{info, warn};

use crate::{
    adapters::{
        dto::payment_dto::{
            CreateOrderRequest, UpgradeResponse, VerifyPaymentRequest, VerifyPaymentResponse,
        },
        extract::Session,
        state::AppState,
    },
    application::error::ApplicationError,
    domain::models::{payment::GatewayOrder, user::Tier},
};

pub struct PaymentController;

impl PaymentController {
    /// POST /api/payment — open a gateway order the client's checkout
    /// widget will pay against.
    pub async fn create_order(
        State(app_state): State<AppState>,
        _session: Session,
        Json(body): Json<CreateOrderRequest>,
    ) -> Result<Json<GatewayOrder>, ApplicationError> {
        let receipt = format!("receipt_{}", Utc::now().timestamp_millis());

        let order = app_state
            .payment_gateway
            .create_order(body.amount, "INR", &receipt)
            .await?;

        Ok(Json(order))
    }

    /// POST /api/verifyPayment — pure signature check, keyed by the
    /// gateway secret rather than a session. Never mutates state and
    /// never says which part of the input failed.
    pub async fn verify_payment(
        State(app_state): State<AppState>,
        Json(body): Json<VerifyPaymentRequest>,
    ) -> Json<VerifyPaymentResponse> {
        let success =
            app_state
                .payment_verifier
                .verify(&body.order_id, &body.payment_id, &body.signature);

        if !success {
            warn!(
                "payment signature verification failed for order {}",
                body.order_id
            );
        }

        Json(VerifyPaymentResponse { success })
    }

    /// POST /api/upgrade — flip the caller's tier to paid. Unconditional
    /// once authenticated; pairs with the client-side checkout flow.
    pub async fn upgrade(
        State(app_state): State<AppState>,
        session: Session,
    ) -> Result<Json<UpgradeResponse>, ApplicationError> {
        let account = app_state
            .user_repository
            .set_tier(&session.email, Tier::Paid)
            .await?;

        info!("account {} upgraded to {} tier", account.id, account.tier);

        Ok(Json(UpgradeResponse { success: true }))
    }
}

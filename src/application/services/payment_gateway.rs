use async_trait::async_trait;

use crate::{application::error::ApplicationError, domain::models::payment::GatewayOrder};

/// Order creation on the external payment gateway. The checkout flow and
/// the money movement stay on the gateway's side; we only open orders.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_order(
        &self,
        amount: u64,
        currency: &str,
        receipt: &str,
    ) -> Result<GatewayOrder, ApplicationError>;
}

use async_trait::async_trait;
use hmac::{Hmac, Mac};
use reqwest::Client;
use sha2::Sha256;
use tracing::warn;

use crate::{
    application::{error::ApplicationError, services::PaymentGateway},
    domain::models::payment::GatewayOrder,
    services::error::ServiceError,
};

type HmacSha256 = Hmac<Sha256>;

/// Checks the signature the payment gateway attaches to a completed
/// checkout: HMAC-SHA256 over `"<order_id>|<payment_id>"`, hex-encoded.
pub struct PaymentVerifier {
    secret: String,
}

impl PaymentVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Constant-time comparison via `Mac::verify_slice`. Callers learn
    /// pass or fail, never which part of the input was wrong.
    pub fn verify(&self, order_id: &str, payment_id: &str, signature: &str) -> bool {
        let Ok(mut mac) = HmacSha256::new_from_slice(self.secret.as_bytes()) else {
            return false;
        };
        mac.update(order_id.as_bytes());
        mac.update(b"|");
        mac.update(payment_id.as_bytes());

        let Ok(provided) = hex::decode(signature) else {
            return false;
        };

        mac.verify_slice(&provided).is_ok()
    }
}

/// Gateway client for opening orders ahead of checkout. Authenticates
/// with the key pair the gateway issued for this merchant account.
pub struct HttpPaymentGateway {
    client: Client,
    api_url: String,
    key_id: String,
    key_secret: String,
}

impl HttpPaymentGateway {
    pub fn new(api_url: &str, key_id: &str, key_secret: &str) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            key_id: key_id.to_string(),
            key_secret: key_secret.to_string(),
        }
    }
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    async fn create_order(
        &self,
        amount: u64,
        currency: &str,
        receipt: &str,
    ) -> Result<GatewayOrder, ApplicationError> {
        let body = serde_json::json!({
            "amount": amount,
            "currency": currency,
            "receipt": receipt,
        });

        let response = self
            .client
            .post(format!("{}/orders", self.api_url))
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(&body)
            .send()
            .await
            .map_err(ServiceError::from)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let detail = response.text().await.unwrap_or_default();
            warn!("order creation rejected with status {}: {}", status, detail);
            return Err(ServiceError::GatewayError(format!(
                "order creation failed with status {}",
                status
            ))
            .into());
        }

        let order = response
            .json::<GatewayOrder>()
            .await
            .map_err(|e| ServiceError::GatewayError(e.to_string()))?;

        Ok(order)
    }
}

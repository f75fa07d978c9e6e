use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    /// Smallest currency unit, as the gateway expects.
    pub amount: u64,
}

#[derive(Debug, Deserialize)]
pub struct VerifyPaymentRequest {
    #[serde(rename = "orderId")]
    pub order_id: String,
    #[serde(rename = "paymentId")]
    pub payment_id: String,
    pub signature: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyPaymentResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct UpgradeResponse {
    pub success: bool,
}

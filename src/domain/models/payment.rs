use serde::{Deserialize, Serialize};

/// Order as returned by the payment gateway's orders API. Extra fields the
/// gateway sends are ignored; the client only needs these to open checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayOrder {
    pub id: String,
    pub amount: u64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

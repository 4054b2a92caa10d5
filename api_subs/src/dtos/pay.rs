use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct SubscribeRequest {
    /// String-formatted decimal, e.g. "50.00".
    pub amount: String,
}

#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    /// Where the payer's browser goes next.
    pub approval_url: String,
}

/// Query parameters the provider appends to the return redirect.
#[derive(Debug, Deserialize)]
pub struct ReturnQuery {
    #[serde(rename = "paymentId")]
    pub payment_id: String,
    #[serde(rename = "PayerID")]
    pub payer_id: String,
}

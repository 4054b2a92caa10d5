use chrono::NaiveDateTime;
use sqlx::types::BigDecimal;
use uuid::Uuid;

/// Persisted before provider confirmation with status `Created`; flipped
/// to `Approved` only after the provider executes the payment.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PaymentRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Provider-assigned payment id.
    pub payment_id: String,
    pub amount: BigDecimal,
    pub status: String,
    pub created_at: NaiveDateTime,
}

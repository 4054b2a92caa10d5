use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct UpdateSubscriber {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub subscribed_at: NaiveDateTime,
    pub is_active: bool,
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub name: String,
    pub message: String,
    /// 1 through 5.
    pub rating: i32,
    pub image_path: Option<String>,
    pub created_at: NaiveDateTime,
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct NewsEvent {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date_time: NaiveDateTime,
    pub news_item: bool,
    pub event_item: bool,
}

use chrono::NaiveDateTime;
use db::models::news::NewsEvent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateNewsEventRequest {
    pub title: String,
    pub description: String,
    pub date_time: NaiveDateTime,
    pub news_item: Option<bool>,
    pub event_item: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct NewsResponse {
    pub news_items: Vec<NewsEvent>,
    pub event_items: Vec<NewsEvent>,
}

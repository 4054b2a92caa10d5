use chrono::NaiveDateTime;

#[derive(Debug)]
pub struct NewsEventCreateRequest {
    pub title: String,
    pub description: String,
    pub date_time: NaiveDateTime,
    pub news_item: bool,
    pub event_item: bool,
}

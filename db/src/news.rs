use chrono::NaiveDateTime;
use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};

use crate::{dtos::news::NewsEventCreateRequest, models::news::NewsEvent};

/// Upcoming or ongoing news items.
pub async fn list_upcoming_news<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    now: NaiveDateTime,
) -> Res<Vec<NewsEvent>> {
    sqlx::query_as::<_, NewsEvent>(
        "SELECT * FROM news_events WHERE news_item = TRUE AND date_time >= $1 ORDER BY date_time",
    )
    .bind(now)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

/// Upcoming or ongoing events.
pub async fn list_upcoming_events<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    now: NaiveDateTime,
) -> Res<Vec<NewsEvent>> {
    sqlx::query_as::<_, NewsEvent>(
        "SELECT * FROM news_events WHERE event_item = TRUE AND date_time >= $1 ORDER BY date_time",
    )
    .bind(now)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn insert_news_event<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: NewsEventCreateRequest,
) -> Res<NewsEvent> {
    sqlx::query_as::<_, NewsEvent>(
        r#"
        INSERT INTO news_events (title, description, date_time, news_item, event_item)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(data.title)
    .bind(data.description)
    .bind(data.date_time)
    .bind(data.news_item)
    .bind(data.event_item)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

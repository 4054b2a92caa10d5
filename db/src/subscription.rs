use chrono::NaiveDateTime;
use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::subscription::Subscription;

/// A user has at most one subscription row (UNIQUE user_id).
pub async fn get_subscription<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<Option<Subscription>> {
    sqlx::query_as::<_, Subscription>("SELECT * FROM subscriptions WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn insert_subscription<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    start_date: NaiveDateTime,
    end_date: NaiveDateTime,
) -> Res<Subscription> {
    sqlx::query_as::<_, Subscription>(
        r#"
        INSERT INTO subscriptions (user_id, start_date, end_date)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(start_date)
    .bind(end_date)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn update_subscription_window<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    start_date: NaiveDateTime,
    end_date: NaiveDateTime,
) -> Res<Subscription> {
    sqlx::query_as::<_, Subscription>(
        r#"
        UPDATE subscriptions
        SET start_date = $2, end_date = $3
        WHERE user_id = $1
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(start_date)
    .bind(end_date)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};

use crate::models::subscriber::UpdateSubscriber;

pub async fn exists_subscriber_by_email<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    email: &str,
) -> Res<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM update_subscribers WHERE email = $1)")
        .bind(email)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

pub async fn insert_subscriber<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    email: &str,
    name: &str,
) -> Res<UpdateSubscriber> {
    sqlx::query_as::<_, UpdateSubscriber>(
        r#"
        INSERT INTO update_subscribers (email, name)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(email)
    .bind(name)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn deactivate_subscriber<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    email: &str,
) -> Res<UpdateSubscriber> {
    sqlx::query_as::<_, UpdateSubscriber>(
        "UPDATE update_subscribers SET is_active = FALSE WHERE email = $1 RETURNING *",
    )
    .bind(email)
    .fetch_optional(executor)
    .await?
    .ok_or_else(|| AppError::NotFound("Subscriber not found".to_string()))
}

pub async fn list_active_subscribers<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
) -> Res<Vec<UpdateSubscriber>> {
    sqlx::query_as::<_, UpdateSubscriber>("SELECT * FROM update_subscribers WHERE is_active = TRUE")
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn count_active_subscribers<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
) -> Res<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM update_subscribers WHERE is_active = TRUE")
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

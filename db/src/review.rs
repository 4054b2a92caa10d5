use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};

use crate::{dtos::review::ReviewCreateRequest, models::review::Review};

pub async fn insert_review<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: ReviewCreateRequest,
) -> Res<Review> {
    sqlx::query_as::<_, Review>(
        r#"
        INSERT INTO reviews (name, message, rating, image_path)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(data.name)
    .bind(data.message)
    .bind(data.rating)
    .bind(data.image_path)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn list_recent_reviews<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    limit: i64,
) -> Res<Vec<Review>> {
    sqlx::query_as::<_, Review>("SELECT * FROM reviews ORDER BY created_at DESC LIMIT $1")
        .bind(limit)
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

/// Average rating over all reviews; 0.0 when there are none.
pub async fn average_rating<'e, E: Executor<'e, Database = Postgres>>(executor: E) -> Res<f64> {
    sqlx::query_scalar::<_, Option<f64>>("SELECT AVG(rating)::float8 FROM reviews")
        .fetch_one(executor)
        .await
        .map(|avg| avg.unwrap_or(0.0))
        .map_err(AppError::from)
}

pub async fn count_reviews<'e, E: Executor<'e, Database = Postgres>>(executor: E) -> Res<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reviews")
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

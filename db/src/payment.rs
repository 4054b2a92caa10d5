use common::error::{AppError, Res};
use sqlx::{Executor, Postgres, types::BigDecimal};
use uuid::Uuid;

use crate::models::payment::PaymentRecord;

pub async fn insert_payment<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    payment_id: &str,
    amount: &BigDecimal,
    status: &str,
) -> Res<PaymentRecord> {
    sqlx::query_as::<_, PaymentRecord>(
        r#"
        INSERT INTO paypal_payments (user_id, payment_id, amount, status)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(payment_id)
    .bind(amount)
    .bind(status)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

/// Lookup by the provider-assigned payment id.
pub async fn get_payment_by_provider_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    payment_id: &str,
) -> Res<Option<PaymentRecord>> {
    sqlx::query_as::<_, PaymentRecord>("SELECT * FROM paypal_payments WHERE payment_id = $1")
        .bind(payment_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn set_payment_status<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    payment_id: &str,
    status: &str,
) -> Res<PaymentRecord> {
    sqlx::query_as::<_, PaymentRecord>(
        "UPDATE paypal_payments SET status = $2 WHERE payment_id = $1 RETURNING *",
    )
    .bind(payment_id)
    .bind(status)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

use actix_web::{Responder, get, web};
use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;

use common::error::Res;
use common::http::Success;
use common::jwt::JwtClaims;

use crate::dtos::sub::SubscriptionStatusResponse;

/// The signed-in user's subscription and whether it is currently active.
#[get("/status")]
pub async fn get_status(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let today = Utc::now().date_naive();

    let subscription = db::subscription::get_subscription(pg_pool, claims.user_id).await?;
    let active = subscription
        .as_ref()
        .is_some_and(|sub| sub.is_active_on(today));
    let expired_on = match (&subscription, active) {
        (Some(sub), false) => sub.end_date,
        _ => None,
    };

    Success::ok(SubscriptionStatusResponse {
        subscription,
        active,
        expired_on,
    })
}

use actix_web::{Responder, get, post, web};
use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;

use common::env_config::Config;
use common::error::Res;
use common::http::Success;
use common::jwt::JwtClaims;
use common::paypal::PaymentGateway;
use mailer::{Mailer, notify};

use crate::dtos::pay::{CheckoutResponse, ReturnQuery, SubscribeRequest};
use crate::services;

/// Starts the paid-membership checkout.
///
/// # Input
/// - `req`: JSON payload with the string-formatted `amount`
///
/// # Output
/// - Success: 201 with the provider approval URL the browser should follow
/// - Error: 400 for malformed amounts, 502 when the provider rejects the
///   payment (nothing is persisted in that case)
#[post("/subscribe")]
pub async fn post_subscribe(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<SubscribeRequest>,
    pool: web::Data<Arc<PgPool>>,
    config: web::Data<Arc<Config>>,
    gateway: web::Data<dyn PaymentGateway>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let amount = services::pay::parse_amount(&req.amount)?;

    let approval_url = services::pay::start_checkout(
        gateway.get_ref(),
        pg_pool,
        &config.paypal,
        claims.user_id,
        amount,
    )
    .await?;

    Success::created(CheckoutResponse { approval_url })
}

/// Provider redirect target after the payer approves.
///
/// # Input
/// - `paymentId` and `PayerID` query parameters appended by the provider
///
/// # Output
/// - Success: the payment record flips to Approved and the paying user's
///   subscription is activated or renewed for 30 days
/// - Error: 404 "Payment not found" for unknown ids (the client restarts
///   the flow), 502 when execution fails (the record stays Created)
///
/// Replays of an already-settled payment id are a no-op success.
#[get("/return")]
pub async fn get_return(
    query: web::Query<ReturnQuery>,
    pool: web::Data<Arc<PgPool>>,
    gateway: web::Data<dyn PaymentGateway>,
    mailer: web::Data<Mailer>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let now = Utc::now().naive_utc();

    let settlement = services::pay::complete_checkout(
        gateway.get_ref(),
        pg_pool,
        &query.payment_id,
        &query.payer_id,
        now,
    )
    .await?;

    // confirmation mail is a side effect, never a reason to fail the flow
    if !settlement.already_settled {
        match db::user::get_user_by_id(pg_pool, settlement.record.user_id).await {
            Ok(user) => {
                let end_date = settlement
                    .subscription
                    .as_ref()
                    .and_then(|sub| sub.end_date)
                    .map(|end| end.date().to_string())
                    .unwrap_or_default();
                if let Err(e) = mailer.send(
                    &user.email,
                    "Subscription Confirmation",
                    &notify::membership_confirmation_html(&user.first_name, &end_date),
                ) {
                    log::warn!("Failed to send payment confirmation to {}: {}", user.email, e);
                }
            }
            Err(e) => log::warn!("Failed to load paying user: {}", e),
        }
    }

    Success::ok(serde_json::json!({
        "message": "Payment successful. Subscription activated"
    }))
}

/// Provider redirect target when the payer cancels at the provider.
#[get("/cancel")]
pub async fn get_cancel() -> Res<impl Responder> {
    Success::ok(serde_json::json!({ "message": "Payment cancelled" }))
}

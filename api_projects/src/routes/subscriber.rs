use actix_web::{Responder, get, post, web};
use sqlx::PgPool;
use std::sync::Arc;

use common::error::{AppError, Res};
use common::http::Success;
use mailer::{Mailer, notify};

use crate::dtos::subscriber::SubscribeUpdatesRequest;

/// Signs an email address up for update notifications.
///
/// # Output
/// - Success: 201 with a confirmation message; a confirmation email is sent
/// - Error: 409 when the email is already subscribed
#[post("/subscribe")]
pub async fn post_subscribe(
    req: web::Json<SubscribeUpdatesRequest>,
    pool: web::Data<Arc<PgPool>>,
    mailer: web::Data<Mailer>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let email = req.email.to_lowercase();

    if db::subscriber::exists_subscriber_by_email(pg_pool, &email).await? {
        return Err(AppError::Conflict(
            "A subscription with this email already exists. Please use a different email address or check your inbox for updates"
                .to_string(),
        ));
    }

    let subscriber = db::subscriber::insert_subscriber(pg_pool, &email, &req.name).await?;

    if let Err(e) = mailer.send(
        &subscriber.email,
        "Subscription Confirmation",
        &notify::subscription_confirmation_html(&subscriber.name),
    ) {
        log::warn!("Failed to send confirmation to {}: {}", subscriber.email, e);
    }

    Success::created(serde_json::json!({
        "message": "Thank you for subscribing! You will receive our latest updates"
    }))
}

/// Unsubscribe link target from the update emails.
#[get("/unsubscribe/{email}")]
pub async fn get_unsubscribe(
    path: web::Path<String>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    db::subscriber::deactivate_subscriber(pg_pool, &path.into_inner()).await?;
    Success::ok(serde_json::json!({ "message": "You have been unsubscribed" }))
}

use actix_web::{Responder, get, post, web};
use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;

use common::error::{AppError, Res};
use common::http::Success;
use common::jwt::JwtClaims;
use db::dtos::news::NewsEventCreateRequest;
use mailer::{Mailer, notify::NotificationKind};

use crate::dtos::news::{CreateNewsEventRequest, NewsResponse};
use crate::services;

/// Upcoming news and events.
#[get("")]
pub async fn get_news(pool: web::Data<Arc<PgPool>>) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let now = Utc::now().naive_utc();

    let news_items = db::news::list_upcoming_news(pg_pool, now).await?;
    let event_items = db::news::list_upcoming_events(pg_pool, now).await?;

    Success::ok(NewsResponse {
        news_items,
        event_items,
    })
}

/// Publishes a news item or event. Admin only; fires an update
/// notification to active subscribers.
#[post("")]
pub async fn post_news_event(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<CreateNewsEventRequest>,
    pool: web::Data<Arc<PgPool>>,
    mailer: web::Data<Mailer>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    if !claims.is_admin {
        return Err(AppError::Forbidden(
            "Only administrators can publish news and events".to_string(),
        ));
    }

    let data = req.into_inner();
    let item = db::news::insert_news_event(
        pg_pool,
        NewsEventCreateRequest {
            title: data.title,
            description: data.description,
            date_time: data.date_time,
            news_item: data.news_item.unwrap_or(false),
            event_item: data.event_item.unwrap_or(false),
        },
    )
    .await?;

    // the publisher decides which notification this is; nothing downstream
    // inspects the entity to pick wording
    let kind = if item.news_item {
        Some(NotificationKind::NewsPosted {
            title: item.title.clone(),
        })
    } else if item.event_item {
        Some(NotificationKind::EventPosted {
            title: item.title.clone(),
        })
    } else {
        None
    };
    if let Some(kind) = kind {
        services::notify::broadcast_update(pg_pool, &mailer, kind).await;
    }

    Success::created(item)
}

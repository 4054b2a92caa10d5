use actix_web::{Responder, get, web};
use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;

use common::error::Res;
use common::http::Success;
use common::misc::{ProjectOccupation, ProjectStatus};
use db::dtos::project::ProjectFilter;

use crate::dtos::home::{AboutResponse, HomeResponse};

const RECENT_PROJECTS: i64 = 3;
const TOP_RESEARCHERS: i64 = 10;
const RECENT_REVIEWS: i64 = 10;

/// Landing-page summary: recent undergraduate projects, upcoming news and
/// events, the most published researchers and the latest reviews.
#[get("/home")]
pub async fn get_home(pool: web::Data<Arc<PgPool>>) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let now = Utc::now().naive_utc();

    let recent_projects = db::project::list_projects(
        pg_pool,
        ProjectFilter {
            occupation: Some(ProjectOccupation::Undergraduate.to_string()),
            limit: Some(RECENT_PROJECTS),
            ..Default::default()
        },
    )
    .await?;

    let projects_count =
        db::project::count_projects_by_status(pg_pool, &ProjectStatus::Active.to_string()).await?;
    let news_items = db::news::list_upcoming_news(pg_pool, now).await?;
    let event_items = db::news::list_upcoming_events(pg_pool, now).await?;
    let researchers = db::user::list_top_researchers(pg_pool, TOP_RESEARCHERS).await?;
    let reviews = db::review::list_recent_reviews(pg_pool, RECENT_REVIEWS).await?;
    let avg_rating = db::review::average_rating(pg_pool).await?;

    Success::ok(HomeResponse {
        recent_projects,
        projects_count,
        news_items,
        event_items,
        researchers,
        reviews,
        avg_rating: (avg_rating * 10.0).round() / 10.0,
    })
}

/// Counters for the about page.
#[get("/about")]
pub async fn get_about(pool: web::Data<Arc<PgPool>>) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;

    Success::ok(AboutResponse {
        trusted_users_count: db::user::count_users(pg_pool).await?,
        subscribers_count: db::subscriber::count_active_subscribers(pg_pool).await?,
        projects_count: db::project::count_projects_by_status(
            pg_pool,
            &ProjectStatus::Active.to_string(),
        )
        .await?,
        reviews_count: db::review::count_reviews(pg_pool).await?,
    })
}

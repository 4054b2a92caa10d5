use actix_web::{Responder, get, post, web};
use sqlx::PgPool;
use std::sync::Arc;

use common::error::{AppError, Res};
use common::http::Success;
use db::dtos::review::ReviewCreateRequest;

use crate::dtos::review::{CreateReviewRequest, ReviewsResponse};

const RECENT_REVIEWS: i64 = 10;

/// Latest reviews plus the overall average rating.
#[get("")]
pub async fn get_reviews(pool: web::Data<Arc<PgPool>>) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let reviews = db::review::list_recent_reviews(pg_pool, RECENT_REVIEWS).await?;
    let avg_rating = db::review::average_rating(pg_pool).await?;

    Success::ok(ReviewsResponse {
        reviews,
        avg_rating: (avg_rating * 10.0).round() / 10.0,
    })
}

/// Leaves a visitor review. No account required.
#[post("")]
pub async fn post_review(
    req: web::Json<CreateReviewRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    if !(1..=5).contains(&req.rating) {
        return Err(AppError::BadRequest(
            "Rating must be between 1 and 5".to_string(),
        ));
    }

    let data = req.into_inner();
    let review = db::review::insert_review(
        pg_pool,
        ReviewCreateRequest {
            name: data.name,
            message: data.message,
            rating: data.rating,
            image_path: data.image_path,
        },
    )
    .await?;

    Success::created(review)
}

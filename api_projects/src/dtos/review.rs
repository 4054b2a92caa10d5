use db::models::review::Review;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub name: String,
    pub message: String,
    /// 1 through 5.
    pub rating: i32,
    pub image_path: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReviewsResponse {
    pub reviews: Vec<Review>,
    pub avg_rating: f64,
}

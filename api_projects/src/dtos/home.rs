use db::models::{
    news::NewsEvent,
    project::Project,
    review::Review,
    user::Researcher,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub recent_projects: Vec<Project>,
    pub projects_count: i64,
    pub news_items: Vec<NewsEvent>,
    pub event_items: Vec<NewsEvent>,
    pub researchers: Vec<Researcher>,
    pub reviews: Vec<Review>,
    pub avg_rating: f64,
}

#[derive(Debug, Serialize)]
pub struct AboutResponse {
    pub trusted_users_count: i64,
    pub subscribers_count: i64,
    pub projects_count: i64,
    pub reviews_count: i64,
}

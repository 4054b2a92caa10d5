use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct AuthCredentials {
    pub user_id: Uuid,
    pub password_hash: String,
}

/// Row shape for the most-published-researchers listing.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Researcher {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub project_count: i64,
}

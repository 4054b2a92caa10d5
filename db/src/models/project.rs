use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub description: String,
    pub email: Option<String>,
    pub github_link: Option<String>,
    pub project_url: Option<String>,
    /// Opaque key into the image blob store.
    pub image_path: Option<String>,
    pub date: NaiveDateTime,
    pub creator_id: Uuid,
    pub status: String,
    pub occupation: String,
    pub postgraduate_type: Option<String>,
    pub is_secure: bool,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Collaborator {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image_path: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct ProjectFile {
    pub id: Uuid,
    pub project_id: Uuid,
    /// Opaque key into the file blob store.
    pub file_path: String,
    pub description: String,
}

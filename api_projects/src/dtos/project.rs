use db::models::project::{Collaborator, Project, ProjectFile};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ProjectListQuery {
    pub page: Option<i64>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub occupation: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MyProjectsQuery {
    /// active (default), completed or cancelled.
    pub status: Option<String>,
    pub page: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
    pub page: i64,
    pub per_page: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub title: String,
    pub description: String,
    pub email: Option<String>,
    pub github_link: Option<String>,
    pub project_url: Option<String>,
    pub image_path: Option<String>,
    pub occupation: String,
    pub postgraduate_type: Option<String>,
    pub is_secure: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    pub name: String,
    pub title: String,
    pub description: String,
    pub email: Option<String>,
    pub github_link: Option<String>,
    pub project_url: Option<String>,
    pub image_path: Option<String>,
    pub occupation: String,
    pub postgraduate_type: Option<String>,
    pub is_secure: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct CollaboratorInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub image_path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FileInput {
    /// Key into the blob store; uploads themselves happen elsewhere.
    pub file_path: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FileUpdateRequest {
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct ProjectDetailsResponse {
    pub project: Project,
    pub collaborators: Vec<Collaborator>,
    pub project_files: Vec<ProjectFile>,
}

use uuid::Uuid;

#[derive(Debug)]
pub struct ProjectCreateRequest {
    pub name: String,
    pub title: String,
    pub description: String,
    pub email: Option<String>,
    pub github_link: Option<String>,
    pub project_url: Option<String>,
    pub image_path: Option<String>,
    pub creator_id: Uuid,
    pub status: String,
    pub occupation: String,
    pub postgraduate_type: Option<String>,
    pub is_secure: bool,
}

#[derive(Debug)]
pub struct ProjectUpdateRequest {
    pub name: String,
    pub title: String,
    pub description: String,
    pub email: Option<String>,
    pub github_link: Option<String>,
    pub project_url: Option<String>,
    pub image_path: Option<String>,
    pub occupation: String,
    pub postgraduate_type: Option<String>,
    pub is_secure: bool,
}

#[derive(Debug)]
pub struct CollaboratorCreateRequest {
    pub project_id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image_path: Option<String>,
}

#[derive(Debug)]
pub struct ProjectFileCreateRequest {
    pub project_id: Uuid,
    pub file_path: String,
    pub description: String,
}

/// Optional filters for the project listing; unset fields match everything.
#[derive(Debug, Default)]
pub struct ProjectFilter {
    pub name: Option<String>,
    pub status: Option<String>,
    pub occupation: Option<String>,
    pub creator_id: Option<Uuid>,
    /// Cancelled projects are excluded unless this is set.
    pub include_cancelled: bool,
    /// Secure projects are excluded unless this is set (admins only).
    pub include_secure: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

use actix_web::{HttpRequest, Responder, delete, get, post, put, web};
use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;

use common::env_config::Config;
use common::error::Res;
use common::http::Success;
use common::jwt::{JwtClaims, maybe_jwt_claims};
use common::misc::ProjectStatus;
use db::dtos::project::{
    CollaboratorCreateRequest, ProjectCreateRequest, ProjectFileCreateRequest, ProjectFilter,
    ProjectUpdateRequest,
};
use mailer::{Mailer, notify::NotificationKind};
use uuid::Uuid;

use crate::dtos::project::{
    CollaboratorInput, CreateProjectRequest, FileInput, FileUpdateRequest, MyProjectsQuery,
    ProjectDetailsResponse, ProjectListQuery, ProjectListResponse, UpdateProjectRequest,
};
use crate::services::{
    self,
    access::{AccessDecision, Viewer, can_view_details},
};

const SHOWCASE_PAGE_SIZE: i64 = 10;
const DASHBOARD_PAGE_SIZE: i64 = 3;

/// Public project listing, newest first.
///
/// # Input
/// - `query`: optional page and name/status/occupation filters
///
/// # Output
/// - Success: a page of projects; cancelled projects are always excluded,
///   secure projects are excluded unless the viewer is an admin
#[get("")]
pub async fn get_projects(
    req: HttpRequest,
    query: web::Query<ProjectListQuery>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let is_admin = maybe_jwt_claims(&req).is_some_and(|claims| claims.is_admin);
    let page = query.page.unwrap_or(1).max(1);

    let filter = ProjectFilter {
        name: query.name.clone(),
        status: query.status.clone(),
        occupation: query.occupation.clone(),
        include_secure: is_admin,
        limit: Some(SHOWCASE_PAGE_SIZE),
        offset: Some((page - 1) * SHOWCASE_PAGE_SIZE),
        ..Default::default()
    };

    let projects = db::project::list_projects(pg_pool, filter).await?;
    Success::ok(ProjectListResponse {
        projects,
        page,
        per_page: SHOWCASE_PAGE_SIZE,
    })
}

/// Published (active or completed) projects of one researcher.
#[get("/researcher/{researcher_id}")]
pub async fn get_researcher_projects(
    path: web::Path<Uuid>,
    query: web::Query<ProjectListQuery>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let researcher_id = path.into_inner();
    let page = query.page.unwrap_or(1).max(1);

    let filter = ProjectFilter {
        creator_id: Some(researcher_id),
        name: query.name.clone(),
        occupation: query.occupation.clone(),
        limit: Some(SHOWCASE_PAGE_SIZE),
        offset: Some((page - 1) * SHOWCASE_PAGE_SIZE),
        ..Default::default()
    };

    let projects = db::project::list_projects(pg_pool, filter).await?;
    Success::ok(ProjectListResponse {
        projects,
        page,
        per_page: SHOWCASE_PAGE_SIZE,
    })
}

/// Project details behind the access gate.
///
/// # Input
/// - `project_id`: path parameter
/// - the bearer token, when present, identifies the viewer
///
/// # Output
/// - Success: project with collaborators and files
/// - Error: 403 for secure projects viewed by strangers, 401 when a gated
///   project is viewed anonymously, 403 when the viewer's subscription is
///   absent or expired, 404 for unknown ids
#[get("/{project_id}")]
pub async fn get_project_details(
    req: HttpRequest,
    path: web::Path<Uuid>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let project = db::project::get_project(pg_pool, path.into_inner()).await?;

    let claims = maybe_jwt_claims(&req);
    let viewer = claims.as_ref().map(|c| Viewer {
        user_id: c.user_id,
        is_admin: c.is_admin,
    });

    let subscription = match &viewer {
        Some(v) => db::subscription::get_subscription(pg_pool, v.user_id).await?,
        None => None,
    };

    let today = Utc::now().date_naive();
    match can_view_details(viewer.as_ref(), &project, subscription.as_ref(), today) {
        AccessDecision::Granted => {}
        AccessDecision::Denied(reason) => return Err(reason.into()),
    }

    let collaborators = db::project::list_collaborators(pg_pool, project.id).await?;
    let project_files = db::project::list_files(pg_pool, project.id).await?;

    Success::ok(ProjectDetailsResponse {
        project,
        collaborators,
        project_files,
    })
}

/// The researcher's own projects, filtered by status.
#[get("")]
pub async fn get_my_projects(
    claims: web::ReqData<JwtClaims>,
    query: web::Query<MyProjectsQuery>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let status = query.status.clone().unwrap_or_else(|| "active".to_string());
    services::project::validate_status(&status)?;
    let page = query.page.unwrap_or(1).max(1);

    let filter = ProjectFilter {
        creator_id: Some(claims.user_id),
        status: Some(status.clone()),
        include_cancelled: status == ProjectStatus::Cancelled.to_string(),
        include_secure: true,
        limit: Some(DASHBOARD_PAGE_SIZE),
        offset: Some((page - 1) * DASHBOARD_PAGE_SIZE),
        ..Default::default()
    };

    let projects = db::project::list_projects(pg_pool, filter).await?;
    Success::ok(ProjectListResponse {
        projects,
        page,
        per_page: DASHBOARD_PAGE_SIZE,
    })
}

/// Projects where the signed-in user is listed as a collaborator.
#[get("/collaborated")]
pub async fn get_collaborated_projects(
    claims: web::ReqData<JwtClaims>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let projects = db::project::list_collaborated_projects(pg_pool, &claims.email).await?;
    Success::ok(projects)
}

/// Publishes a new project.
///
/// # Input
/// - `req`: project fields; the status is always set to active
///
/// # Output
/// - Success: the created project with 201 Created status
/// - Error: 403 when the creator's email is not a university address
///
/// Publishing fires an update notification to active subscribers.
#[post("")]
pub async fn post_project(
    claims: web::ReqData<JwtClaims>,
    req: web::Json<CreateProjectRequest>,
    pool: web::Data<Arc<PgPool>>,
    config: web::Data<Arc<Config>>,
    mailer: web::Data<Mailer>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    services::project::require_university_email(&claims, &config.university_email_domain)?;
    services::project::validate_occupation(&req.occupation)?;

    let data = req.into_inner();
    let project = db::project::insert_project(
        pg_pool,
        ProjectCreateRequest {
            name: data.name,
            title: data.title,
            description: data.description,
            email: data.email,
            github_link: data.github_link,
            project_url: data.project_url,
            image_path: data.image_path,
            creator_id: claims.user_id,
            status: ProjectStatus::Active.to_string(),
            occupation: data.occupation,
            postgraduate_type: data.postgraduate_type,
            is_secure: data.is_secure.unwrap_or(false),
        },
    )
    .await?;

    services::notify::broadcast_update(
        pg_pool,
        &mailer,
        NotificationKind::ProjectAdded {
            title: project.title.clone(),
        },
    )
    .await;

    Success::created(project)
}

/// Updates a project's fields. Status transitions go through the cancel
/// and complete endpoints instead.
#[put("/{project_id}")]
pub async fn put_project(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    req: web::Json<UpdateProjectRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let project = db::project::get_project(pg_pool, path.into_inner()).await?;
    services::project::require_owner(&project, &claims)?;
    services::project::validate_occupation(&req.occupation)?;

    let data = req.into_inner();
    let updated = db::project::update_project(
        pg_pool,
        project.id,
        ProjectUpdateRequest {
            name: data.name,
            title: data.title,
            description: data.description,
            email: data.email,
            github_link: data.github_link,
            project_url: data.project_url,
            image_path: data.image_path,
            occupation: data.occupation,
            postgraduate_type: data.postgraduate_type,
            is_secure: data.is_secure.unwrap_or(project.is_secure),
        },
    )
    .await?;

    Success::ok(updated)
}

#[post("/{project_id}/cancel")]
pub async fn post_cancel_project(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let project = db::project::get_project(pg_pool, path.into_inner()).await?;
    services::project::require_owner(&project, &claims)?;

    let updated = db::project::set_project_status(
        pg_pool,
        project.id,
        &ProjectStatus::Cancelled.to_string(),
    )
    .await?;
    Success::ok(updated)
}

#[post("/{project_id}/complete")]
pub async fn post_complete_project(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let project = db::project::get_project(pg_pool, path.into_inner()).await?;
    services::project::require_owner(&project, &claims)?;

    let updated = db::project::set_project_status(
        pg_pool,
        project.id,
        &ProjectStatus::Completed.to_string(),
    )
    .await?;
    Success::ok(updated)
}

/// Attaches collaborators to a project.
#[post("/{project_id}/collaborators")]
pub async fn post_collaborators(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    req: web::Json<Vec<CollaboratorInput>>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let project = db::project::get_project(pg_pool, path.into_inner()).await?;
    services::project::require_owner(&project, &claims)?;

    let mut collaborators = Vec::with_capacity(req.len());
    for input in req.into_inner() {
        let collaborator = db::project::insert_collaborator(
            pg_pool,
            CollaboratorCreateRequest {
                project_id: project.id,
                name: input.name,
                email: input.email,
                image_path: input.image_path,
            },
        )
        .await?;
        collaborators.push(collaborator);
    }

    Success::created(collaborators)
}

/// Records file metadata against a project. The blobs themselves live in
/// the external store; only paths and descriptions are kept here.
#[post("/{project_id}/files")]
pub async fn post_files(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    req: web::Json<Vec<FileInput>>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let project = db::project::get_project(pg_pool, path.into_inner()).await?;
    services::project::require_owner(&project, &claims)?;

    let mut files = Vec::with_capacity(req.len());
    for input in req.into_inner() {
        let file = db::project::insert_file(
            pg_pool,
            ProjectFileCreateRequest {
                project_id: project.id,
                file_path: input.file_path,
                description: input.description.unwrap_or_default(),
            },
        )
        .await?;
        files.push(file);
    }

    Success::created(files)
}

#[put("/files/{file_id}")]
pub async fn put_file(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    req: web::Json<FileUpdateRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let file = db::project::get_file(pg_pool, path.into_inner()).await?;
    let project = db::project::get_project(pg_pool, file.project_id).await?;
    services::project::require_owner(&project, &claims)?;

    db::project::update_file_description(pg_pool, file.id, &req.description).await?;
    Success::ok(serde_json::json!({ "message": "File updated" }))
}

#[delete("/files/{file_id}")]
pub async fn delete_file(
    claims: web::ReqData<JwtClaims>,
    path: web::Path<Uuid>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let file = db::project::get_file(pg_pool, path.into_inner()).await?;
    let project = db::project::get_project(pg_pool, file.project_id).await?;
    services::project::require_owner(&project, &claims)?;

    db::project::delete_file(pg_pool, file.id).await?;
    Success::ok(serde_json::json!({ "message": "File deleted" }))
}

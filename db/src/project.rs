use common::error::{AppError, Res};
use sqlx::{Executor, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    dtos::project::{
        CollaboratorCreateRequest, ProjectCreateRequest, ProjectFileCreateRequest, ProjectFilter,
        ProjectUpdateRequest,
    },
    models::project::{Collaborator, Project, ProjectFile},
};

/// Filtered, newest-first project listing.
pub async fn list_projects<'e, E>(executor: E, filter: ProjectFilter) -> Res<Vec<Project>>
where
    E: Executor<'e, Database = Postgres>,
{
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM projects");
    let mut conditions_added = false;

    // Helper to add WHERE or AND
    let mut add_condition_separator = |qb: &mut QueryBuilder<Postgres>| {
        if !conditions_added {
            qb.push(" WHERE ");
            conditions_added = true;
        } else {
            qb.push(" AND ");
        }
    };

    if !filter.include_cancelled {
        add_condition_separator(&mut qb);
        qb.push("status <> 'cancelled'");
    }

    if !filter.include_secure {
        add_condition_separator(&mut qb);
        qb.push("is_secure = FALSE");
    }

    if let Some(name) = filter.name {
        add_condition_separator(&mut qb);
        qb.push("name ILIKE ").push_bind(format!("%{}%", name));
    }

    if let Some(status) = filter.status {
        add_condition_separator(&mut qb);
        qb.push("status = ").push_bind(status);
    }

    if let Some(occupation) = filter.occupation {
        add_condition_separator(&mut qb);
        qb.push("occupation = ").push_bind(occupation);
    }

    if let Some(creator_id) = filter.creator_id {
        add_condition_separator(&mut qb);
        qb.push("creator_id = ").push_bind(creator_id);
    }

    qb.push(" ORDER BY date DESC");

    if let Some(limit) = filter.limit {
        qb.push(" LIMIT ").push_bind(limit);
    }

    if let Some(offset) = filter.offset {
        qb.push(" OFFSET ").push_bind(offset);
    }

    let query = qb.build_query_as::<Project>();

    query.fetch_all(executor).await.map_err(AppError::from)
}

pub async fn get_project<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    project_id: Uuid,
) -> Res<Project> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
        .bind(project_id)
        .fetch_optional(executor)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
}

pub async fn insert_project<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: ProjectCreateRequest,
) -> Res<Project> {
    sqlx::query_as::<_, Project>(
        r#"
        INSERT INTO projects
            (name, title, description, email, github_link, project_url, image_path,
             creator_id, status, occupation, postgraduate_type, is_secure)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING *
        "#,
    )
    .bind(data.name)
    .bind(data.title)
    .bind(data.description)
    .bind(data.email)
    .bind(data.github_link)
    .bind(data.project_url)
    .bind(data.image_path)
    .bind(data.creator_id)
    .bind(data.status)
    .bind(data.occupation)
    .bind(data.postgraduate_type)
    .bind(data.is_secure)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn update_project<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    project_id: Uuid,
    data: ProjectUpdateRequest,
) -> Res<Project> {
    sqlx::query_as::<_, Project>(
        r#"
        UPDATE projects
        SET name = $2, title = $3, description = $4, email = $5, github_link = $6,
            project_url = $7, image_path = $8, occupation = $9, postgraduate_type = $10,
            is_secure = $11
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(project_id)
    .bind(data.name)
    .bind(data.title)
    .bind(data.description)
    .bind(data.email)
    .bind(data.github_link)
    .bind(data.project_url)
    .bind(data.image_path)
    .bind(data.occupation)
    .bind(data.postgraduate_type)
    .bind(data.is_secure)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn set_project_status<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    project_id: Uuid,
    status: &str,
) -> Res<Project> {
    sqlx::query_as::<_, Project>(
        "UPDATE projects SET status = $2 WHERE id = $1 RETURNING *",
    )
    .bind(project_id)
    .bind(status)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn count_projects_by_status<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    status: &str,
) -> Res<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects WHERE status = $1")
        .bind(status)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

/// Projects where one of the collaborators carries the given email.
pub async fn list_collaborated_projects<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    email: &str,
) -> Res<Vec<Project>> {
    sqlx::query_as::<_, Project>(
        r#"
        SELECT p.* FROM projects p
        JOIN collaborators c ON c.project_id = p.id
        WHERE c.email = $1
        ORDER BY p.date DESC
        "#,
    )
    .bind(email)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn list_collaborators<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    project_id: Uuid,
) -> Res<Vec<Collaborator>> {
    sqlx::query_as::<_, Collaborator>("SELECT * FROM collaborators WHERE project_id = $1")
        .bind(project_id)
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn insert_collaborator<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: CollaboratorCreateRequest,
) -> Res<Collaborator> {
    sqlx::query_as::<_, Collaborator>(
        r#"
        INSERT INTO collaborators (project_id, name, email, image_path)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(data.project_id)
    .bind(data.name)
    .bind(data.email)
    .bind(data.image_path)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn list_files<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    project_id: Uuid,
) -> Res<Vec<ProjectFile>> {
    sqlx::query_as::<_, ProjectFile>("SELECT * FROM project_files WHERE project_id = $1")
        .bind(project_id)
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn insert_file<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: ProjectFileCreateRequest,
) -> Res<ProjectFile> {
    sqlx::query_as::<_, ProjectFile>(
        r#"
        INSERT INTO project_files (project_id, file_path, description)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(data.project_id)
    .bind(data.file_path)
    .bind(data.description)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn get_file<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    file_id: Uuid,
) -> Res<ProjectFile> {
    sqlx::query_as::<_, ProjectFile>("SELECT * FROM project_files WHERE id = $1")
        .bind(file_id)
        .fetch_optional(executor)
        .await?
        .ok_or_else(|| AppError::NotFound("File not found".to_string()))
}

pub async fn update_file_description<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    file_id: Uuid,
    description: &str,
) -> Res<()> {
    sqlx::query("UPDATE project_files SET description = $2 WHERE id = $1")
        .bind(file_id)
        .bind(description)
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn delete_file<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    file_id: Uuid,
) -> Res<()> {
    sqlx::query("DELETE FROM project_files WHERE id = $1")
        .bind(file_id)
        .execute(executor)
        .await?;
    Ok(())
}

use actix_web::web::{self};

pub mod routes {
    pub mod home;
    pub mod news;
    pub mod project;
    pub mod review;
    pub mod subscriber;
}

pub mod services {
    pub mod access;
    pub mod notify;
    pub(crate) mod project;
}

mod dtos {
    pub(crate) mod home;
    pub(crate) mod news;
    pub(crate) mod project;
    pub(crate) mod review;
    pub(crate) mod subscriber;
}

/// Public showcase surface: listings, gated details, reviews, news and
/// update-subscriber signup.
pub fn mount_showcase() -> actix_web::Scope {
    web::scope("/projects")
        .service(routes::project::get_projects)
        .service(routes::project::get_researcher_projects)
        .service(routes::project::get_project_details)
}

pub fn mount_reviews() -> actix_web::Scope {
    web::scope("/reviews")
        .service(routes::review::get_reviews)
        .service(routes::review::post_review)
}

pub fn mount_news() -> actix_web::Scope {
    web::scope("/news").service(routes::news::get_news)
}

pub fn mount_updates() -> actix_web::Scope {
    web::scope("/updates")
        .service(routes::subscriber::post_subscribe)
        .service(routes::subscriber::get_unsubscribe)
}

pub fn mount_pages() -> actix_web::Scope {
    web::scope("/pages")
        .service(routes::home::get_home)
        .service(routes::home::get_about)
}

/// Researcher dashboard: project CRUD, collaborators, file metadata and
/// admin-only news publishing. Mounted behind the auth guard.
pub fn mount_dashboard() -> actix_web::Scope {
    web::scope("/projects")
        .service(routes::project::get_my_projects)
        .service(routes::project::get_collaborated_projects)
        .service(routes::project::post_project)
        .service(routes::project::put_project)
        .service(routes::project::post_cancel_project)
        .service(routes::project::post_complete_project)
        .service(routes::project::post_collaborators)
        .service(routes::project::post_files)
        .service(routes::project::put_file)
        .service(routes::project::delete_file)
}

pub fn mount_news_admin() -> actix_web::Scope {
    web::scope("/news").service(routes::news::post_news_event)
}

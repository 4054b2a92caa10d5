use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgSslMode},
};
use std::{str::FromStr, sync::Arc};

pub mod log;
pub mod news;
pub mod payment;
pub mod project;
pub mod review;
pub mod subscriber;
pub mod subscription;
pub mod user;

pub mod models {
    pub mod log;
    pub mod news;
    pub mod payment;
    pub mod project;
    pub mod review;
    pub mod subscriber;
    pub mod subscription;
    pub mod user;
}

pub mod dtos {
    pub mod news;
    pub mod project;
    pub mod review;
    pub mod user;
}

/// Connects to the configured database, creating it first if it does not
/// exist, and applies pending migrations.
pub async fn setup(
    database_url: &str,
    require_ssl: bool,
) -> Result<Arc<PgPool>, Box<dyn std::error::Error>> {
    let url = url::Url::parse(database_url)?;
    let db_name = url.path().trim_start_matches('/');

    let admin_url = format!(
        "postgresql://{}:{}@{}:{}/postgres",
        url.username(),
        url.password().unwrap_or(""),
        url.host_str().unwrap_or("localhost"),
        url.port().unwrap_or(5432)
    );

    let admin_pool = PgPool::connect_with(connect_options(&admin_url, require_ssl)?).await?;

    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(db_name)
            .fetch_one(&admin_pool)
            .await?;

    if !exists {
        sqlx::query(&format!("CREATE DATABASE \"{}\"", db_name))
            .execute(&admin_pool)
            .await?;
    }

    admin_pool.close().await;

    let pool = PgPool::connect_with(connect_options(database_url, require_ssl)?).await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(Arc::new(pool))
}

fn connect_options(url: &str, require_ssl: bool) -> Result<PgConnectOptions, sqlx::Error> {
    let mut options = PgConnectOptions::from_str(url)?;
    if require_ssl {
        options = options.ssl_mode(PgSslMode::Require);
    }
    Ok(options)
}

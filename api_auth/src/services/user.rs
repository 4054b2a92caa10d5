use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, password_hash::PasswordHasher};
use common::error::{AppError, Res};
use db::dtos::user::{CredentialsCreateRequest, UserCreateRequest};
use db::models::user::User;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::auth::RegisterRequest;

pub async fn exists_user_by_email(pool: &PgPool, email: &str) -> Res<bool> {
    db::user::exists_user_by_email(pool, email).await
}

pub async fn get_user_by_id(pool: &PgPool, user_id: Uuid) -> Res<User> {
    db::user::get_user_by_id(pool, user_id).await
}

/// Inserts the user record and its hashed credentials in one transaction.
pub async fn create_user_with_credentials(pool: &PgPool, data: &RegisterRequest) -> Res<User> {
    let mut tx = pool.begin().await?;

    let user = db::user::insert_user(
        &mut *tx,
        UserCreateRequest {
            email: data.email.to_lowercase(),
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
        },
    )
    .await?;

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(data.password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?
        .to_string();

    db::user::insert_user_credentials(
        &mut *tx,
        CredentialsCreateRequest {
            user_id: user.id,
            password_hash,
        },
    )
    .await?;

    tx.commit().await?;

    Ok(user)
}

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};
use common::error::{AppError, Res};
use db::models::user::User;
use sqlx::PgPool;

use crate::dtos::auth::LoginRequest;

/// Authenticates existing user.
/// If user does not exist, returns 400.
/// If the password does not match the stored hash, returns 401.
pub async fn authenticate_user(pool: &PgPool, login_data: &LoginRequest) -> Res<User> {
    let email = login_data.email.to_lowercase();

    let credentials = db::user::get_credentials_by_email(pool, &email)
        .await?
        .ok_or_else(|| AppError::BadRequest("User with this email does not exist".to_string()))?;

    let parsed_hash = PasswordHash::new(&credentials.password_hash)
        .map_err(|e| AppError::Internal(format!("Stored password hash is invalid: {}", e)))?;
    let is_valid = Argon2::default()
        .verify_password(login_data.password.as_bytes(), &parsed_hash)
        .is_ok();

    if is_valid {
        db::user::get_user_by_id(pool, credentials.user_id).await
    } else {
        Err(AppError::Unauthorized("Invalid credentials".to_string()))
    }
}

use uuid::Uuid;

#[derive(Debug)]
pub struct UserCreateRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug)]
pub struct CredentialsCreateRequest {
    pub user_id: Uuid,
    pub password_hash: String,
}

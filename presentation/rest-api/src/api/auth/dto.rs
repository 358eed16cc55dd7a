use poem_openapi::Object;

use crate::api::security::AuthenticatedUser;

#[derive(Debug, Clone, Object)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct LoginResponse {
    /// Signed bearer token, valid for 15 minutes
    pub token: String,
}

#[derive(Debug, Clone, Object)]
pub struct AuthenticatedUserDto {
    pub id: i64,
    pub username: String,
    #[oai(skip_serializing_if_is_none)]
    pub permissions: Option<Vec<String>>,
}

impl From<AuthenticatedUser> for AuthenticatedUserDto {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            id: user.id,
            username: user.username,
            permissions: user.permissions,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UserResponse {
    pub message: String,
    pub user: AuthenticatedUserDto,
}

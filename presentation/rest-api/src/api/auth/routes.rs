use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::auth::use_cases::login::{LoginParams, LoginUseCase};

use crate::api::auth::dto::{LoginRequest, LoginResponse, UserResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::{BearerAuth, issue_token};
use crate::api::tags::ApiTags;

pub struct AuthApi {
    login_use_case: Arc<dyn LoginUseCase>,
    jwt_secret: String,
}

impl AuthApi {
    pub fn new(login_use_case: Arc<dyn LoginUseCase>, jwt_secret: String) -> Self {
        Self {
            login_use_case,
            jwt_secret,
        }
    }
}

#[OpenApi]
impl AuthApi {
    /// Authenticate and receive a bearer token
    ///
    /// The token embeds the identity and its permission set and expires
    /// after 15 minutes; there is no refresh.
    #[oai(path = "/login", method = "post", tag = "ApiTags::Auth")]
    async fn login(&self, body: Json<LoginRequest>) -> PostLoginResponse {
        let params = LoginParams {
            username: body.0.username,
            password: body.0.password,
        };

        let identity = match self.login_use_case.execute(params).await {
            Ok(identity) => identity,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return PostLoginResponse::Unauthorized(json);
            }
        };

        match issue_token(&identity, &self.jwt_secret) {
            Ok(token) => PostLoginResponse::Ok(Json(LoginResponse { token })),
            Err(e) => {
                tracing::error!("failed to sign token: {e}");
                PostLoginResponse::InternalError(Json(ErrorResponse::new("auth.token_signing")))
            }
        }
    }

    /// Current authenticated user
    #[oai(path = "/user", method = "get", tag = "ApiTags::Auth")]
    async fn user(&self, auth: BearerAuth) -> Json<UserResponse> {
        let user = auth.0;
        Json(UserResponse {
            message: format!("Olá, {}.", user.username),
            user: user.into(),
        })
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum PostLoginResponse {
    #[oai(status = 200)]
    Ok(Json<LoginResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::auth::errors::AuthError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for AuthError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            AuthError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Credenciais inválidas"),
            AuthError::MissingPermissions => (
                StatusCode::UNAUTHORIZED,
                "Usuário não tem permissões definidas",
            ),
            AuthError::PermissionDenied => (
                StatusCode::FORBIDDEN,
                "Usuário não tem permissão necessária para acessar esta rota",
            ),
        };

        (status, Json(ErrorResponse::new(message)))
    }
}

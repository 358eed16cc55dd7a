use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::RepositoryError;
use business::domain::produto::errors::ProdutoError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProdutoError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            ProdutoError::NameEmpty => (StatusCode::BAD_REQUEST, "produto.name_empty"),
            ProdutoError::PriceNegative => (StatusCode::BAD_REQUEST, "produto.price_negative"),
            ProdutoError::InvalidImageName => {
                (StatusCode::BAD_REQUEST, "produto.invalid_image_name")
            }
            ProdutoError::NotFound => (StatusCode::NOT_FOUND, "produto.not_found"),
            ProdutoError::ImageStoreFailed => {
                (StatusCode::INTERNAL_SERVER_ERROR, "produto.image_store_failed")
            }
            ProdutoError::Repository(RepositoryError::Duplicated) => {
                (StatusCode::CONFLICT, "produto.duplicated")
            }
            ProdutoError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "repository.persistence")
            }
        };

        (status, Json(ErrorResponse::new(message)))
    }
}

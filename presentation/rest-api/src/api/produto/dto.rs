use poem_openapi::types::multipart::Upload;
use poem_openapi::{Multipart, Object};

use business::domain::produto::model::Produto;

/// Wire representation of a produto. Field names stay camelCase for
/// compatibility with the clients of the service this one replaces.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProdutoResponse {
    pub id: i32,
    /// Correlation id with an external source, unique when present
    #[oai(skip_serializing_if_is_none)]
    pub external_id: Option<String>,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    /// External URL, or a server-local path after an image upload
    #[oai(skip_serializing_if_is_none)]
    pub picture_url: Option<String>,
}

impl From<Produto> for ProdutoResponse {
    fn from(produto: Produto) -> Self {
        Self {
            id: produto.id,
            external_id: produto.external_id,
            name: produto.name,
            description: produto.description,
            price: produto.price,
            category: produto.category,
            picture_url: produto.picture_url,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateProdutoRequest {
    /// Product name (cannot be empty)
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Non-negative price
    pub price: f64,
    pub category: String,
    #[oai(skip_serializing_if_is_none)]
    pub picture_url: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub external_id: Option<String>,
}

/// Full-field update; omitted fields keep their stored value.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateProdutoRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub picture_url: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub external_id: Option<String>,
}

/// Multipart payload for the picture upload route.
#[derive(Debug, Multipart)]
pub struct UploadPictureRequest {
    pub file: Upload,
}

#[derive(Debug, Clone, Object)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Object)]
pub struct DeletedProdutoResponse {
    pub id: i32,
}

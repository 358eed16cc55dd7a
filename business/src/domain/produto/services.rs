use async_trait::async_trait;

use super::errors::ProdutoError;

/// Service port for persisting uploaded product images.
///
/// `save` writes the bytes under the given file name and returns the path
/// the image can later be served from.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn save(&self, file_name: &str, bytes: &[u8]) -> Result<String, ProdutoError>;
}

/// Service port deciding whether a product category is allowed.
///
/// Implementations consult an external service and must fail closed: any
/// transport or parse error counts as "not allowed".
#[async_trait]
pub trait CategoryPolicy: Send + Sync {
    async fn is_allowed(&self, category: &str) -> bool;
}

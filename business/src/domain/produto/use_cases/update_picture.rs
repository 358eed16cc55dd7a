use async_trait::async_trait;

use crate::domain::produto::errors::ProdutoError;
use crate::domain::produto::model::Produto;

pub struct UpdateProdutoPictureParams {
    /// Name of the uploaded file; only its extension is used.
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub id: i32,
}

#[async_trait]
pub trait UpdateProdutoPictureUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProdutoPictureParams) -> Result<Produto, ProdutoError>;
}

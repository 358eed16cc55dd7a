use async_trait::async_trait;

use crate::domain::produto::errors::ProdutoError;

pub struct DeleteProdutoParams {
    pub id: i32,
}

#[async_trait]
pub trait DeleteProdutoUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProdutoParams) -> Result<(), ProdutoError>;
}

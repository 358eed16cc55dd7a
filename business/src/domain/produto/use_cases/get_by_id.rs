use async_trait::async_trait;

use crate::domain::produto::errors::ProdutoError;
use crate::domain::produto::model::Produto;

pub struct GetProdutoByIdParams {
    pub id: i32,
}

#[async_trait]
pub trait GetProdutoByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetProdutoByIdParams) -> Result<Produto, ProdutoError>;
}

use async_trait::async_trait;

use crate::domain::produto::errors::ProdutoError;
use crate::domain::produto::model::Produto;

#[async_trait]
pub trait GetAllProdutosUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Produto>, ProdutoError>;
}

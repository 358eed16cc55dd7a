use async_trait::async_trait;

use crate::domain::produto::errors::ProdutoError;
use crate::domain::produto::model::Produto;

/// Returns the produtos whose category the configured policy allows.
#[async_trait]
pub trait FilterAllowedProdutosUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Produto>, ProdutoError>;
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::produto::errors::ProdutoError;
use crate::domain::produto::model::Produto;
use crate::domain::produto::repository::ProdutoRepository;
use crate::domain::produto::use_cases::get_all::GetAllProdutosUseCase;

pub struct GetAllProdutosUseCaseImpl {
    pub repository: Arc<dyn ProdutoRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProdutosUseCase for GetAllProdutosUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Produto>, ProdutoError> {
        self.logger.debug("Listing produtos");
        let produtos = self.repository.all().await?;
        Ok(produtos)
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::produto::errors::ProdutoError;
use crate::domain::produto::model::Produto;
use crate::domain::produto::repository::ProdutoRepository;
use crate::domain::produto::use_cases::get_by_id::{GetProdutoByIdParams, GetProdutoByIdUseCase};

pub struct GetProdutoByIdUseCaseImpl {
    pub repository: Arc<dyn ProdutoRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProdutoByIdUseCase for GetProdutoByIdUseCaseImpl {
    async fn execute(&self, params: GetProdutoByIdParams) -> Result<Produto, ProdutoError> {
        self.logger
            .debug(&format!("Fetching produto: {}", params.id));

        self.repository
            .get_one(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProdutoError::NotFound,
                other => ProdutoError::Repository(other),
            })
    }
}

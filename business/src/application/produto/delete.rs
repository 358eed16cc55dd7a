use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::produto::errors::ProdutoError;
use crate::domain::produto::repository::ProdutoRepository;
use crate::domain::produto::use_cases::delete::{DeleteProdutoParams, DeleteProdutoUseCase};

pub struct DeleteProdutoUseCaseImpl {
    pub repository: Arc<dyn ProdutoRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProdutoUseCase for DeleteProdutoUseCaseImpl {
    async fn execute(&self, params: DeleteProdutoParams) -> Result<(), ProdutoError> {
        self.logger
            .info(&format!("Deleting produto: {}", params.id));

        self.repository
            .delete_one(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProdutoError::NotFound,
                other => ProdutoError::Repository(other),
            })?;

        self.logger
            .info(&format!("Produto deleted: {}", params.id));
        Ok(())
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::produto::errors::ProdutoError;
use crate::domain::produto::model::{Produto, ProdutoChanges};
use crate::domain::produto::repository::ProdutoRepository;
use crate::domain::produto::use_cases::update::{UpdateProdutoParams, UpdateProdutoUseCase};

pub struct UpdateProdutoUseCaseImpl {
    pub repository: Arc<dyn ProdutoRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProdutoUseCase for UpdateProdutoUseCaseImpl {
    async fn execute(&self, params: UpdateProdutoParams) -> Result<Produto, ProdutoError> {
        self.logger
            .info(&format!("Updating produto: {}", params.id));

        let changes = ProdutoChanges {
            external_id: params.external_id,
            name: params.name,
            description: params.description,
            price: params.price,
            category: params.category,
            picture_url: params.picture_url,
        };
        changes.validate()?;

        let produto = self
            .repository
            .update_one(params.id, &changes)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProdutoError::NotFound,
                other => ProdutoError::Repository(other),
            })?;

        self.logger
            .info(&format!("Produto updated: {}", produto.id));
        Ok(produto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::produto::model::NewProduto;
    use mockall::mock;

    mock! {
        pub ProdutoRepo {}

        #[async_trait]
        impl ProdutoRepository for ProdutoRepo {
            async fn all(&self) -> Result<Vec<Produto>, RepositoryError>;
            async fn get_one(&self, id: i32) -> Result<Produto, RepositoryError>;
            async fn add_one(&self, produto: &NewProduto) -> Result<Produto, RepositoryError>;
            async fn update_one(&self, id: i32, changes: &ProdutoChanges) -> Result<Produto, RepositoryError>;
            async fn delete_one(&self, id: i32) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn empty_params(id: i32) -> UpdateProdutoParams {
        UpdateProdutoParams {
            id,
            external_id: None,
            name: None,
            description: None,
            price: None,
            category: None,
            picture_url: None,
        }
    }

    #[tokio::test]
    async fn should_update_produto_when_id_exists() {
        let mut mock_repo = MockProdutoRepo::new();
        mock_repo.expect_update_one().returning(|id, changes| {
            Ok(Produto {
                id,
                external_id: None,
                name: changes.name.clone().unwrap_or_else(|| "Antigo".to_string()),
                description: None,
                price: changes.price.unwrap_or(10.0),
                category: "A".to_string(),
                picture_url: None,
            })
        });

        let use_case = UpdateProdutoUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let mut params = empty_params(3);
        params.name = Some("Novo nome".to_string());
        let produto = use_case.execute(params).await.unwrap();

        assert_eq!(produto.id, 3);
        assert_eq!(produto.name, "Novo nome");
    }

    #[tokio::test]
    async fn should_pass_only_provided_fields_to_repository() {
        // A picture-only update must leave every other field untouched.
        let mut mock_repo = MockProdutoRepo::new();
        mock_repo
            .expect_update_one()
            .withf(|id, changes| {
                *id == 5
                    && changes.picture_url.as_deref() == Some("img/5.png")
                    && changes.name.is_none()
                    && changes.description.is_none()
                    && changes.price.is_none()
                    && changes.category.is_none()
                    && changes.external_id.is_none()
            })
            .returning(|id, changes| {
                Ok(Produto {
                    id,
                    external_id: None,
                    name: "Inalterado".to_string(),
                    description: Some("Também inalterado".to_string()),
                    price: 10.0,
                    category: "A".to_string(),
                    picture_url: changes.picture_url.clone(),
                })
            });

        let use_case = UpdateProdutoUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let mut params = empty_params(5);
        params.picture_url = Some("img/5.png".to_string());
        let produto = use_case.execute(params).await.unwrap();

        assert_eq!(produto.name, "Inalterado");
        assert_eq!(produto.picture_url.as_deref(), Some("img/5.png"));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_nonexistent_produto() {
        let mut mock_repo = MockProdutoRepo::new();
        mock_repo
            .expect_update_one()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = UpdateProdutoUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(empty_params(404)).await;
        assert!(matches!(result.unwrap_err(), ProdutoError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_update_when_provided_name_is_blank() {
        let mut mock_repo = MockProdutoRepo::new();
        mock_repo.expect_update_one().never();

        let use_case = UpdateProdutoUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let mut params = empty_params(1);
        params.name = Some("  ".to_string());
        let result = use_case.execute(params).await;

        assert!(matches!(result.unwrap_err(), ProdutoError::NameEmpty));
    }
}

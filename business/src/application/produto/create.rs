use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::produto::errors::ProdutoError;
use crate::domain::produto::model::{NewProduto, NewProdutoProps, Produto};
use crate::domain::produto::repository::ProdutoRepository;
use crate::domain::produto::use_cases::create::{CreateProdutoParams, CreateProdutoUseCase};

pub struct CreateProdutoUseCaseImpl {
    pub repository: Arc<dyn ProdutoRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProdutoUseCase for CreateProdutoUseCaseImpl {
    async fn execute(&self, params: CreateProdutoParams) -> Result<Produto, ProdutoError> {
        self.logger
            .info(&format!("Creating produto: {}", params.name));

        let novo = NewProduto::new(NewProdutoProps {
            external_id: params.external_id,
            name: params.name,
            description: params.description,
            price: params.price,
            category: params.category,
            picture_url: params.picture_url,
        })?;

        let produto = self.repository.add_one(&novo).await?;

        self.logger
            .info(&format!("Produto created with id: {}", produto.id));
        Ok(produto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::produto::model::ProdutoChanges;
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

    fn params(name: &str, price: f64) -> CreateProdutoParams {
        CreateProdutoParams {
            external_id: None,
            name: name.to_string(),
            description: Some("Descrição".to_string()),
            price,
            category: "A".to_string(),
            picture_url: None,
        }
    }

    #[tokio::test]
    async fn should_create_produto_when_fields_are_valid() {
        let mut mock_repo = MockProdutoRepo::new();
        mock_repo.expect_add_one().returning(|novo| {
            Ok(Produto {
                id: 1,
                external_id: novo.external_id.clone(),
                name: novo.name.clone(),
                description: novo.description.clone(),
                price: novo.price,
                category: novo.category.clone(),
                picture_url: novo.picture_url.clone(),
            })
        });

        let use_case = CreateProdutoUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Produto 1", 10.0)).await;

        assert!(result.is_ok());
        let produto = result.unwrap();
        assert_eq!(produto.id, 1);
        assert_eq!(produto.name, "Produto 1");
        assert_eq!(produto.price, 10.0);
    }

    #[tokio::test]
    async fn should_reject_produto_when_name_is_empty() {
        let mut mock_repo = MockProdutoRepo::new();
        mock_repo.expect_add_one().never();

        let use_case = CreateProdutoUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("", 10.0)).await;

        assert!(matches!(result.unwrap_err(), ProdutoError::NameEmpty));
    }

    #[tokio::test]
    async fn should_reject_produto_when_price_is_negative() {
        let mut mock_repo = MockProdutoRepo::new();
        mock_repo.expect_add_one().never();

        let use_case = CreateProdutoUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Produto 1", -5.0)).await;

        assert!(matches!(result.unwrap_err(), ProdutoError::PriceNegative));
    }

    #[tokio::test]
    async fn should_propagate_duplicated_when_external_id_already_exists() {
        let mut mock_repo = MockProdutoRepo::new();
        mock_repo
            .expect_add_one()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = CreateProdutoUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let mut create = params("Produto 1", 10.0);
        create.external_id = Some("ext-1".to_string());
        let result = use_case.execute(create).await;

        assert!(matches!(
            result.unwrap_err(),
            ProdutoError::Repository(RepositoryError::Duplicated)
        ));
    }
}

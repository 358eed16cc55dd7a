use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::produto::errors::ProdutoError;
use crate::domain::produto::model::Produto;
use crate::domain::produto::repository::ProdutoRepository;
use crate::domain::produto::services::CategoryPolicy;
use crate::domain::produto::use_cases::filter_allowed::FilterAllowedProdutosUseCase;

pub struct FilterAllowedProdutosUseCaseImpl {
    pub repository: Arc<dyn ProdutoRepository>,
    pub policy: Arc<dyn CategoryPolicy>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FilterAllowedProdutosUseCase for FilterAllowedProdutosUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Produto>, ProdutoError> {
        let produtos = self.repository.all().await?;
        self.logger
            .info(&format!("Checking categories for {} produtos", produtos.len()));

        let mut allowed = Vec::new();
        for produto in produtos {
            if self.policy.is_allowed(&produto.category).await {
                allowed.push(produto);
            }
        }

        self.logger
            .info(&format!("{} produtos have an allowed category", allowed.len()));
        Ok(allowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::produto::model::{NewProduto, ProdutoChanges};
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
        pub Policy {}

        #[async_trait]
        impl CategoryPolicy for Policy {
            async fn is_allowed(&self, category: &str) -> bool;
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

    fn produto(id: i32, category: &str) -> Produto {
        Produto {
            id,
            external_id: None,
            name: format!("Produto {}", id),
            description: None,
            price: 10.0,
            category: category.to_string(),
            picture_url: None,
        }
    }

    #[tokio::test]
    async fn should_keep_only_produtos_with_allowed_category() {
        let mut mock_repo = MockProdutoRepo::new();
        mock_repo.expect_all().returning(|| {
            Ok(vec![
                produto(1, "bebidas"),
                produto(2, "eletronicos"),
                produto(3, "bebidas"),
            ])
        });

        let mut mock_policy = MockPolicy::new();
        mock_policy
            .expect_is_allowed()
            .returning(|category| category == "bebidas");

        let use_case = FilterAllowedProdutosUseCaseImpl {
            repository: Arc::new(mock_repo),
            policy: Arc::new(mock_policy),
            logger: mock_logger(),
        };

        let allowed = use_case.execute().await.unwrap();
        assert_eq!(allowed.len(), 2);
        assert!(allowed.iter().all(|p| p.category == "bebidas"));
    }

    #[tokio::test]
    async fn should_return_empty_list_when_policy_denies_everything() {
        // A fail-closed policy answers false for every category.
        let mut mock_repo = MockProdutoRepo::new();
        mock_repo
            .expect_all()
            .returning(|| Ok(vec![produto(1, "bebidas")]));

        let mut mock_policy = MockPolicy::new();
        mock_policy.expect_is_allowed().returning(|_| false);

        let use_case = FilterAllowedProdutosUseCaseImpl {
            repository: Arc::new(mock_repo),
            policy: Arc::new(mock_policy),
            logger: mock_logger(),
        };

        let allowed = use_case.execute().await.unwrap();
        assert!(allowed.is_empty());
    }
}

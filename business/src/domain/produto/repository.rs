use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduto, Produto, ProdutoChanges};

/// Persistence port for the `produtos` table.
///
/// Implementations must run every write inside a transaction: commit before
/// returning, roll back on any failure. `update_one` merges only the fields
/// provided in `changes` (omitted fields keep their stored value) and
/// returns the post-update row read inside the same transaction.
#[async_trait]
pub trait ProdutoRepository: Send + Sync {
    async fn all(&self) -> Result<Vec<Produto>, RepositoryError>;
    async fn get_one(&self, id: i32) -> Result<Produto, RepositoryError>;
    async fn add_one(&self, produto: &NewProduto) -> Result<Produto, RepositoryError>;
    async fn update_one(
        &self,
        id: i32,
        changes: &ProdutoChanges,
    ) -> Result<Produto, RepositoryError>;
    async fn delete_one(&self, id: i32) -> Result<(), RepositoryError>;
}

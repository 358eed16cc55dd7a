use async_trait::async_trait;

use crate::domain::produto::errors::ProdutoError;
use crate::domain::produto::model::Produto;

/// Every field except `id` is optional: omitted fields keep the value
/// already stored on the row.
pub struct UpdateProdutoParams {
    pub id: i32,
    pub external_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub picture_url: Option<String>,
}

#[async_trait]
pub trait UpdateProdutoUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProdutoParams) -> Result<Produto, ProdutoError>;
}

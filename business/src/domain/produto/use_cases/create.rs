use async_trait::async_trait;

use crate::domain::produto::errors::ProdutoError;
use crate::domain::produto::model::Produto;

pub struct CreateProdutoParams {
    pub external_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub picture_url: Option<String>,
}

#[async_trait]
pub trait CreateProdutoUseCase: Send + Sync {
    async fn execute(&self, params: CreateProdutoParams) -> Result<Produto, ProdutoError>;
}

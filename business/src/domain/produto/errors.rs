#[derive(Debug, thiserror::Error)]
pub enum ProdutoError {
    #[error("produto.name_empty")]
    NameEmpty,
    #[error("produto.price_negative")]
    PriceNegative,
    #[error("produto.not_found")]
    NotFound,
    #[error("produto.invalid_image_name")]
    InvalidImageName,
    #[error("produto.image_store_failed")]
    ImageStoreFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

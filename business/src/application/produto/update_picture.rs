use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::produto::errors::ProdutoError;
use crate::domain::produto::model::{Produto, ProdutoChanges};
use crate::domain::produto::repository::ProdutoRepository;
use crate::domain::produto::services::ImageStore;
use crate::domain::produto::use_cases::update_picture::{
    UpdateProdutoPictureParams, UpdateProdutoPictureUseCase,
};

pub struct UpdateProdutoPictureUseCaseImpl {
    pub repository: Arc<dyn ProdutoRepository>,
    pub image_store: Arc<dyn ImageStore>,
    pub logger: Arc<dyn Logger>,
}

/// Extracts a safe extension from the uploaded file name.
///
/// Only the final extension is kept, and it must be purely alphanumeric, so
/// a crafted file name can never escape the image directory.
fn sanitized_extension(file_name: &str) -> Result<String, ProdutoError> {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|e| e.to_ascii_lowercase())
        .ok_or(ProdutoError::InvalidImageName)
}

#[async_trait]
impl UpdateProdutoPictureUseCase for UpdateProdutoPictureUseCaseImpl {
    async fn execute(&self, params: UpdateProdutoPictureParams) -> Result<Produto, ProdutoError> {
        self.logger
            .info(&format!("Updating picture for produto: {}", params.id));

        let extension = sanitized_extension(&params.file_name)?;

        // Make sure the produto exists before touching the filesystem.
        self.repository
            .get_one(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProdutoError::NotFound,
                other => ProdutoError::Repository(other),
            })?;

        let stored_name = format!("{}.{}", params.id, extension);
        let picture_url = self.image_store.save(&stored_name, &params.bytes).await?;

        let changes = ProdutoChanges {
            picture_url: Some(picture_url),
            ..Default::default()
        };

        let produto = self
            .repository
            .update_one(params.id, &changes)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProdutoError::NotFound,
                other => ProdutoError::Repository(other),
            })?;

        self.logger
            .info(&format!("Picture stored for produto: {}", produto.id));
        Ok(produto)
    }
}

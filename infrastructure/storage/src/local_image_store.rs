use std::path::PathBuf;

use async_trait::async_trait;

use business::domain::produto::errors::ProdutoError;
use business::domain::produto::services::ImageStore;

/// Filesystem adapter for the [`ImageStore`] port.
///
/// Images land in a single flat directory; the business layer has already
/// reduced the file name to `<id>.<extension>`, so nothing here interprets
/// path separators.
pub struct LocalImageStore {
    dir: PathBuf,
}

impl LocalImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn save(&self, file_name: &str, bytes: &[u8]) -> Result<String, ProdutoError> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            tracing::error!("failed to create image directory {:?}: {e}", self.dir);
            ProdutoError::ImageStoreFailed
        })?;

        let path = self.dir.join(file_name);
        tokio::fs::write(&path, bytes).await.map_err(|e| {
            tracing::error!("failed to write image {:?}: {e}", path);
            ProdutoError::ImageStoreFailed
        })?;

        Ok(path.to_string_lossy().into_owned())
    }
}

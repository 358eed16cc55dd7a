use std::env;

/// Image storage configuration
pub struct StorageConfig {
    /// Directory uploaded product images are written to
    pub image_dir: String,
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - IMAGE_DIR: image directory (default: "./img")
    pub fn from_env() -> Self {
        Self {
            image_dir: env::var("IMAGE_DIR").unwrap_or_else(|_| "./img".to_string()),
        }
    }
}

use std::env;

/// Allowed-category service configuration
pub struct AllowlistConfig {
    /// Base URL of the remote allowed-category service
    pub base_url: String,
}

impl AllowlistConfig {
    /// Load allowlist configuration from environment variables
    ///
    /// Environment variables:
    /// - ALLOWED_CATEGORY_URL: service base URL
    ///   (default: "https://posdesweb.igormaldonado.com.br")
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("ALLOWED_CATEGORY_URL")
                .unwrap_or_else(|_| "https://posdesweb.igormaldonado.com.br".to_string()),
        }
    }
}

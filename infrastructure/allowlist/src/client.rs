use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use business::domain::produto::services::CategoryPolicy;

/// HTTP adapter for the remote allowed-category service.
///
/// The service answers `{"allowed": true|false}` for a category name. The
/// adapter fails closed: any transport or parse error counts as "not
/// allowed".
pub struct AllowedCategoryClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct AllowedCategoryResponse {
    allowed: bool,
}

impl AllowedCategoryClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self { client, base_url }
    }

    /// Returns the allowed-category endpoint URL.
    fn allowed_category_url(&self) -> String {
        format!("{}/api/allowedCategory", self.base_url)
    }
}

#[async_trait]
impl CategoryPolicy for AllowedCategoryClient {
    async fn is_allowed(&self, category: &str) -> bool {
        let response = self
            .client
            .get(self.allowed_category_url())
            .query(&[("category", category)])
            .send()
            .await;

        match response {
            Ok(response) => match response.json::<AllowedCategoryResponse>().await {
                Ok(body) => body.allowed,
                Err(e) => {
                    tracing::warn!("allowed-category response unreadable for {category}: {e}");
                    false
                }
            },
            Err(e) => {
                tracing::warn!("allowed-category lookup failed for {category}: {e}");
                false
            }
        }
    }
}

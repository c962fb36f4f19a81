use super::types::GenerateContentRequest;
use crate::{Result, config::GeminiConfig};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// Seam between request handling and the remote inference API, so handlers
/// can be exercised against a mock without a live endpoint.
#[async_trait]
pub trait GeminiClient: Send + Sync {
    /// Sends one prompt-plus-image request and returns the raw response body.
    /// The body shape is assumed but not guaranteed; callers must treat it
    /// as opaque until it has been through the extractor.
    async fn generate_content(&self, image_base64: &str) -> Result<Value>;
}

pub struct HttpGeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl HttpGeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            model: config.model,
        }
    }
}

#[async_trait]
impl GeminiClient for HttpGeminiClient {
    async fn generate_content(&self, image_base64: &str) -> Result<Value> {
        let url = format!(
            "{}/v1/models/{}:generateContent",
            self.base_url, self.model
        );

        // The URL is logged without the key query parameter.
        debug!(
            "Calling Gemini at {} with {} bytes of image data",
            url,
            image_base64.len()
        );

        let request = GenerateContentRequest::for_image(image_base64);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let body = response.json::<Value>().await?;

        debug!("Received Gemini response");

        Ok(body)
    }
}

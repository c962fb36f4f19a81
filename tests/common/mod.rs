use animalface_rust::{Error, Result, gemini::GeminiClient};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Mock Gemini client for testing
pub struct MockGeminiClient {
    pub response: Value,
    pub error: Option<String>,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl MockGeminiClient {
    pub fn new(response: Value) -> Self {
        Self {
            response,
            error: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_error(error: impl Into<String>) -> Self {
        Self {
            response: Value::Null,
            error: Some(error.into()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GeminiClient for MockGeminiClient {
    async fn generate_content(&self, image_base64: &str) -> Result<Value> {
        self.requests.lock().unwrap().push(image_base64.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::internal(error.clone()));
        }

        Ok(self.response.clone())
    }
}

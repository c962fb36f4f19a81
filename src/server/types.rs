use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Either a data URL (`data:image/jpeg;base64,...`) or a bare base64
    /// string.
    pub image: String,
}

impl AnalyzeRequest {
    /// Returns the raw base64 payload, with any data-URL prefix stripped.
    pub fn base64_payload(&self) -> &str {
        match self.image.split_once(',') {
            Some((_prefix, payload)) => payload,
            None => &self.image,
        }
    }
}

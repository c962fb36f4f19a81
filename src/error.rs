use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The Gemini response body did not contain a usable text part at
    /// `candidates[0].content.parts[0].text`. Carries the full raw body
    /// for diagnostics.
    #[error("Upstream response contained no usable text")]
    InvalidUpstreamResponse { raw: serde_json::Value },

    /// Cleaning the model text (code-fence stripping) failed. Carries the
    /// original, uncleaned text.
    #[error("Failed to clean model text")]
    TextCleaningFailed { raw: String },

    /// The cleaned model text was not valid JSON. Carries the cleaned text
    /// that failed to parse.
    #[error("Model text was not valid JSON")]
    JsonParseFailed { raw: String },

    #[error("HTTP error: {0}")]
    Http(#[from] axum::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

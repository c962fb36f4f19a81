mod client;
mod types;

pub use client::{GeminiClient, HttpGeminiClient};
pub use types::*;

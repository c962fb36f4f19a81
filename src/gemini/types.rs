use serde::Serialize;

/// Prompt sent alongside every image. The output format is a best-effort
/// contract enforced only by these instructions, never by the server.
pub const ANALYSIS_PROMPT: &str = "\
Analyze the face in this photo and output the TOP 3 animals it resembles, as JSON only.

{
  \"face_summary\": \"short summary of the facial features\",
  \"animals\": [
    { \"animal\": \"animal name\", \"similarity\": number, \"reason\": \"short reason\" },
    { \"animal\": \"animal name\", \"similarity\": number, \"reason\": \"short reason\" },
    { \"animal\": \"animal name\", \"similarity\": number, \"reason\": \"short reason\" }
  ]
}

Rules:
- No text outside the JSON
- No code blocks
- Sort by similarity, highest first
";

/// Request body for the `generateContent` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Clone, Serialize)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

impl GenerateContentRequest {
    /// Builds the fixed prompt-plus-image request for one analysis call.
    pub fn for_image(image_base64: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: ANALYSIS_PROMPT.to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: "image/jpeg".to_string(),
                            data: image_base64.to_string(),
                        },
                    },
                ],
            }],
        }
    }
}

//! Pulls the application-level JSON result out of a raw Gemini response.
//!
//! The model is only asked, via the prompt, to answer with bare JSON; it
//! sometimes wraps the payload in a markdown code fence anyway. This module
//! navigates the response structure, strips fence markers, and parses what
//! remains. No schema is enforced on the parsed value.

use crate::{Error, Result};
use serde_json::Value;

/// Extracts the JSON payload from a raw `generateContent` response body.
///
/// Failure classification, in order:
/// - `InvalidUpstreamResponse` when `candidates[0].content.parts[0].text`
///   is missing, not a string, or empty (carries the full raw body);
/// - `JsonParseFailed` when the fence-stripped text is not valid JSON
///   (carries the cleaned text).
///
/// On success the parsed value is returned verbatim.
pub fn extract(raw: &Value) -> Result<Value> {
    let text = candidate_text(raw)
        .ok_or_else(|| Error::InvalidUpstreamResponse { raw: raw.clone() })?;

    let clean = clean_model_text(text);

    serde_json::from_str(&clean).map_err(|_| Error::JsonParseFailed { raw: clean })
}

/// Walks `candidates[0].content.parts[0].text`, treating every level as
/// possibly absent. Returns `None` for a missing path or an empty string.
fn candidate_text(raw: &Value) -> Option<&str> {
    raw.get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
        .filter(|text| !text.is_empty())
}

/// Removes ```` ```json ```` markers and bare ```` ``` ```` closers, then
/// trims surrounding whitespace.
fn clean_model_text(text: &str) -> String {
    text.replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn upstream_with_text(text: &str) -> Value {
        json!({
            "candidates": [
                { "content": { "parts": [ { "text": text } ] } }
            ]
        })
    }

    #[test]
    fn test_extract_plain_json_passes_through() {
        let inner = json!({
            "face_summary": "sharp features",
            "animals": [
                { "animal": "fox", "similarity": 92, "reason": "narrow eyes" },
                { "animal": "cat", "similarity": 85, "reason": "small chin" },
                { "animal": "deer", "similarity": 70, "reason": "long face" }
            ]
        });
        let raw = upstream_with_text(&inner.to_string());

        let result = extract(&raw).unwrap();
        assert_eq!(result, inner);
    }

    #[test]
    fn test_extract_strips_json_code_fence() {
        let raw = upstream_with_text("```json\n{\"face_summary\":\"x\",\"animals\":[]}\n```");

        let result = extract(&raw).unwrap();
        assert_eq!(result, json!({"face_summary": "x", "animals": []}));
    }

    #[test]
    fn test_extract_strips_bare_code_fence() {
        let raw = upstream_with_text("```\n{\"face_summary\":\"y\",\"animals\":[]}\n```");

        let result = extract(&raw).unwrap();
        assert_eq!(result, json!({"face_summary": "y", "animals": []}));
    }

    #[test]
    fn test_extract_does_not_reorder_animals() {
        // Ordering is a prompt instruction, not a server invariant.
        let inner = json!({
            "face_summary": "soft features",
            "animals": [
                { "animal": "rabbit", "similarity": 40, "reason": "a" },
                { "animal": "hamster", "similarity": 95, "reason": "b" }
            ]
        });
        let raw = upstream_with_text(&inner.to_string());

        assert_eq!(extract(&raw).unwrap(), inner);
    }

    #[test]
    fn test_extract_fails_on_empty_body() {
        let raw = json!({});

        match extract(&raw) {
            Err(Error::InvalidUpstreamResponse { raw: diagnostic }) => {
                assert_eq!(diagnostic, json!({}));
            }
            other => panic!("expected InvalidUpstreamResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_fails_on_each_missing_path_segment() {
        let truncated_bodies = vec![
            json!({ "candidates": [] }),
            json!({ "candidates": [{}] }),
            json!({ "candidates": [ { "content": {} } ] }),
            json!({ "candidates": [ { "content": { "parts": [] } } ] }),
            json!({ "candidates": [ { "content": { "parts": [{}] } } ] }),
        ];

        for raw in truncated_bodies {
            match extract(&raw) {
                Err(Error::InvalidUpstreamResponse { raw: diagnostic }) => {
                    assert_eq!(diagnostic, raw);
                }
                other => panic!("expected InvalidUpstreamResponse for {}, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_extract_fails_on_non_string_text() {
        let raw = json!({
            "candidates": [ { "content": { "parts": [ { "text": 42 } ] } } ]
        });

        assert!(matches!(
            extract(&raw),
            Err(Error::InvalidUpstreamResponse { .. })
        ));
    }

    #[test]
    fn test_extract_fails_on_empty_text() {
        let raw = upstream_with_text("");

        assert!(matches!(
            extract(&raw),
            Err(Error::InvalidUpstreamResponse { .. })
        ));
    }

    #[test]
    fn test_extract_fails_on_prose() {
        let raw = upstream_with_text("I think this looks like a fox");

        match extract(&raw) {
            Err(Error::JsonParseFailed { raw: diagnostic }) => {
                assert_eq!(diagnostic, "I think this looks like a fox");
            }
            other => panic!("expected JsonParseFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_json_parse_failure_carries_cleaned_text() {
        let raw = upstream_with_text("```json\n  not json at all  \n```");

        match extract(&raw) {
            Err(Error::JsonParseFailed { raw: diagnostic }) => {
                // Diagnostic is the fence-stripped, trimmed text.
                assert_eq!(diagnostic, "not json at all");
            }
            other => panic!("expected JsonParseFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_clean_model_text_trims_whitespace() {
        assert_eq!(clean_model_text("  {\"a\":1}  \n"), "{\"a\":1}");
    }

    #[test]
    fn test_clean_model_text_handles_unfenced_input() {
        assert_eq!(clean_model_text("{\"a\":1}"), "{\"a\":1}");
    }
}

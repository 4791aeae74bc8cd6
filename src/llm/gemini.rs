use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use crate::errors::AuditError;
use super::provider::LLMProvider;
use super::types::LLMResponse;
use tracing::debug;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiProvider {
    pub fn with_base_url(api_key: &str, model: &str, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    async fn complete(&self, prompt: &str) -> Result<LLMResponse, AuditError> {
        let body = json!({
            "contents": [{"role": "user", "parts": [{"text": prompt}]}],
        });

        debug!(model = %self.model, prompt_chars = prompt.len(), "Sending Gemini request");

        // Key goes in a header, never in the URL.
        let resp = self.client.post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AuditError::Network(format!("Gemini request failed: {}", e)))?;

        let status = resp.status().as_u16();
        if status == 429 {
            return Err(AuditError::RateLimit("Gemini rate limit".into()));
        }
        if status == 401 || status == 403 {
            return Err(AuditError::Authentication("Gemini rejected the API key".into()));
        }

        let data: Value = resp.json().await
            .map_err(|e| AuditError::LLMApi(format!("Parse error (HTTP {}): {}", status, e)))?;

        let content = extract_text(&data)?;

        Ok(LLMResponse {
            content,
            input_tokens: data["usageMetadata"]["promptTokenCount"].as_u64(),
            output_tokens: data["usageMetadata"]["candidatesTokenCount"].as_u64(),
            model: self.model.clone(),
        })
    }

    fn provider_name(&self) -> &str { "gemini" }
    fn model_name(&self) -> &str { &self.model }
}

/// Pull the generated text out of a `generateContent` response body.
///
/// The text parts of the first candidate are concatenated unchanged. A body
/// carrying an `error` object, or one with no text at all, is an error.
pub fn extract_text(data: &Value) -> Result<String, AuditError> {
    if let Some(error) = data.get("error") {
        return Err(AuditError::LLMApi(error["message"].as_str().unwrap_or("").to_string()));
    }

    let parts = data["candidates"][0]["content"]["parts"]
        .as_array()
        .ok_or_else(|| AuditError::LLMApi("Malformed Gemini response: no candidate content".into()))?;

    let texts: Vec<&str> = parts.iter().filter_map(|p| p["text"].as_str()).collect();
    if texts.is_empty() {
        return Err(AuditError::LLMApi("Malformed Gemini response: no text parts".into()));
    }
    Ok(texts.concat())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_single_part() {
        let data = json!({
            "candidates": [{"content": {"parts": [{"text": "Overall performance improved."}]}}]
        });
        assert_eq!(extract_text(&data).unwrap(), "Overall performance improved.");
    }

    #[test]
    fn test_extract_joins_parts_verbatim() {
        let data = json!({
            "candidates": [{"content": {"parts": [{"text": "First.\n\n"}, {"text": "  Second. "}]}}]
        });
        assert_eq!(extract_text(&data).unwrap(), "First.\n\n  Second. ");
    }

    #[test]
    fn test_extract_error_object_message() {
        let data = json!({"error": {"code": 400, "message": "API key not valid"}});
        let err = extract_text(&data).unwrap_err();
        assert_eq!(err.detail(), "API key not valid");
    }

    #[test]
    fn test_extract_error_without_message_is_empty_detail() {
        let data = json!({"error": {"code": 500}});
        let err = extract_text(&data).unwrap_err();
        assert_eq!(err.detail(), "");
    }

    #[test]
    fn test_extract_missing_candidates() {
        let data = json!({"promptFeedback": {"blockReason": "SAFETY"}});
        assert!(matches!(extract_text(&data), Err(AuditError::LLMApi(_))));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let provider = GeminiProvider::with_base_url("k", "gemini-2.5-flash", "http://127.0.0.1:9/");
        assert_eq!(
            provider.endpoint(),
            "http://127.0.0.1:9/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert_eq!(provider.provider_name(), "gemini");
        assert_eq!(provider.model_name(), "gemini-2.5-flash");
    }
}

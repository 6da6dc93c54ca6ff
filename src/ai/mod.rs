pub mod prompts;
pub mod safety;

use serde::Deserialize;
use serde_json::json;

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// OpenAI-compatible chat client. Cheap to clone (reqwest::Client is an Arc).
///
/// The key is optional: without one the client reports `enabled() == false`
/// and every call short-circuits to [`AppError::AiDisabled`].
#[derive(Debug, Clone)]
pub struct AiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl AiClient {
    pub fn from_config(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.openai_api_key.clone(),
            base_url: config.openai_base_url.clone(),
        }
    }

    pub fn enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Plain-text chat completion.
    pub async fn chat(
        &self,
        model: &str,
        user_message: &str,
        max_tokens: u32,
    ) -> AppResult<String> {
        self.complete(model, user_message, max_tokens, false).await
    }

    /// Chat completion with JSON-mode preference enabled; the assistant is
    /// expected to return a JSON object in its content.
    pub async fn chat_json(
        &self,
        model: &str,
        user_message: &str,
        max_tokens: u32,
    ) -> AppResult<String> {
        self.complete(model, user_message, max_tokens, true).await
    }

    async fn complete(
        &self,
        model: &str,
        user_message: &str,
        max_tokens: u32,
        json_mode: bool,
    ) -> AppResult<String> {
        let api_key = self.api_key.as_deref().ok_or(AppError::AiDisabled)?;

        let endpoint = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let mut body = json!({
            "model": model,
            "messages": [
                { "role": "system", "content": prompts::SYSTEM_PROMPT },
                { "role": "user", "content": user_message },
            ],
            "max_completion_tokens": max_tokens,
        });
        if json_mode {
            body["response_format"] = json!({ "type": "json_object" });
        }

        let response = self
            .http
            .post(endpoint)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&body)
            .send()
            .await
            .map_err(|err| AppError::Upstream(format!("provider request failed: {}", err)))?;

        let status = response.status();
        let body_text = response
            .text()
            .await
            .map_err(|err| AppError::Upstream(format!("provider response read failed: {}", err)))?;

        if !status.is_success() {
            return Err(AppError::Upstream(format!(
                "provider request failed ({}): {}",
                status, body_text
            )));
        }

        let parsed: ChatResponse = serde_json::from_str(&body_text).map_err(|err| {
            AppError::Upstream(format!("provider response parse failed: {}", err))
        })?;

        parsed
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::Upstream("provider response missing assistant content".to_string()))
    }
}

/// Parses the assistant content as a JSON object, falling back to the raw
/// text so the caller still gets a 200 with something inspectable.
pub fn json_payload(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap_or_else(|_| json!({ "error": "Parse error", "raw": raw }))
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_payload_passes_through_objects() {
        let payload = json_payload(r#"{"answer": "H2O"}"#);
        assert_eq!(payload["answer"], "H2O");
    }

    #[test]
    fn json_payload_wraps_non_json_content() {
        let payload = json_payload("the model rambled instead");
        assert_eq!(payload["error"], "Parse error");
        assert_eq!(payload["raw"], "the model rambled instead");
    }

    #[tokio::test]
    async fn disabled_client_refuses_without_network() {
        let client = AiClient::from_config(&Config::default());
        assert!(!client.enabled());
        let err = client.chat("gpt-5-mini", "what is a mole?", 100).await.unwrap_err();
        assert!(matches!(err, AppError::AiDisabled));
    }
}

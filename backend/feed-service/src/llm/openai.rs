// ============================================
// OpenAI chat completions provider
// ============================================

use super::{CompletionError, CompletionProvider};
use crate::config::CompletionConfig;
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub struct OpenAIProvider {
    client: HttpClient,
    api_key: String,
    api_base: String,
    model: String,
}

impl OpenAIProvider {
    /// A missing key is sent as an empty bearer token; the service rejects it
    /// with an authentication error like any other failed call.
    pub fn new(api_key: Option<&str>, api_base: &str, model: &str) -> Self {
        Self {
            client: HttpClient::new(),
            api_key: api_key.unwrap_or_default().to_string(),
            api_base: api_base.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    pub fn from_config(config: &CompletionConfig) -> Self {
        Self::new(config.api_key.as_deref(), &config.api_base, &config.model)
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }
}

#[derive(Serialize)]
struct OpenAICompletionRequest<'a> {
    model: &'a str,
    messages: Vec<OpenAIMessage<'a>>,
}

#[derive(Serialize)]
struct OpenAIMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct OpenAICompletionResponse {
    #[serde(default)]
    choices: Vec<OpenAIChoice>,
}

#[derive(Deserialize)]
struct OpenAIChoice {
    message: Option<OpenAIResponseMessage>,
}

#[derive(Deserialize)]
struct OpenAIResponseMessage {
    content: Option<String>,
}

impl OpenAICompletionResponse {
    fn first_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
    }
}

#[async_trait]
impl CompletionProvider for OpenAIProvider {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let request = OpenAICompletionRequest {
            model: &self.model,
            messages: vec![OpenAIMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let result: OpenAICompletionResponse = response.json().await?;
        debug!(model = %self.model, choices = result.choices.len(), "Completion received");

        result.first_text().ok_or(CompletionError::Empty)
    }

    fn name(&self) -> &str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_text_takes_the_first_choice() {
        let response: OpenAICompletionResponse = serde_json::from_value(serde_json::json!({
            "choices": [
                {"message": {"role": "assistant", "content": "first"}},
                {"message": {"role": "assistant", "content": "second"}}
            ]
        }))
        .unwrap();

        assert_eq!(response.first_text().as_deref(), Some("first"));
    }

    #[test]
    fn missing_choices_or_content_yield_nothing() {
        let no_choices: OpenAICompletionResponse =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(no_choices.first_text().is_none());

        let null_content: OpenAICompletionResponse = serde_json::from_value(serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        }))
        .unwrap();
        assert!(null_content.first_text().is_none());
    }

    #[test]
    fn trailing_slash_in_base_url_is_ignored() {
        let provider = OpenAIProvider::new(None, "http://localhost:9000/v1/", "gpt-4");
        assert_eq!(
            provider.completions_url(),
            "http://localhost:9000/v1/chat/completions"
        );
    }
}

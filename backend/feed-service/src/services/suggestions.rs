/// Suggestion service - post ideas from the completion provider
use crate::error::{AppError, Result};
use crate::llm::CompletionProvider;
use crate::metrics::SUGGESTION_REQUESTS_TOTAL;
use std::sync::Arc;

const GENERIC_PROMPT: &str = "Suggest a short, original idea for a text post on a social network";

/// Topic-specific prompt for a non-blank topic, the generic prompt otherwise.
pub fn build_prompt(topic: Option<&str>) -> String {
    match topic.map(str::trim).filter(|topic| !topic.is_empty()) {
        Some(topic) => format!("{} on the topic: {}", GENERIC_PROMPT, topic),
        None => GENERIC_PROMPT.to_string(),
    }
}

#[derive(Clone)]
pub struct SuggestionService {
    provider: Arc<dyn CompletionProvider>,
}

impl SuggestionService {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Ask the provider for a post idea and return its trimmed text.
    ///
    /// Every call is a fresh upstream request. Upstream details are logged;
    /// callers only ever see the static failure message.
    pub async fn suggest_post_idea(&self, topic: Option<&str>) -> Result<String> {
        let prompt = build_prompt(topic);

        let suggestion = match self.provider.complete(&prompt).await {
            Ok(text) => text.trim().to_string(),
            Err(err) => {
                SUGGESTION_REQUESTS_TOTAL
                    .with_label_values(&["upstream_error"])
                    .inc();
                tracing::warn!(provider = self.provider.name(), error = %err, "Post idea request failed");
                return Err(AppError::upstream());
            }
        };

        if suggestion.is_empty() {
            SUGGESTION_REQUESTS_TOTAL
                .with_label_values(&["upstream_error"])
                .inc();
            tracing::warn!(provider = self.provider.name(), "Completion text was blank");
            return Err(AppError::upstream());
        }

        SUGGESTION_REQUESTS_TOTAL.with_label_values(&["success"]).inc();
        Ok(suggestion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_topic_uses_generic_prompt() {
        assert_eq!(build_prompt(None), GENERIC_PROMPT);
        assert_eq!(build_prompt(Some("")), GENERIC_PROMPT);
        assert_eq!(build_prompt(Some("   ")), GENERIC_PROMPT);
    }

    #[test]
    fn topic_is_appended_to_the_prompt() {
        let prompt = build_prompt(Some(" travel "));
        assert!(prompt.starts_with(GENERIC_PROMPT));
        assert!(prompt.ends_with("on the topic: travel"));
    }
}

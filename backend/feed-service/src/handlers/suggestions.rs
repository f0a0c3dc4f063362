/// Post-idea suggestion handler
use crate::error::Result;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct SuggestionRequest {
    /// Non-string values are treated as no topic
    #[serde(default, deserialize_with = "string_or_none")]
    pub topic: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub suggestion: String,
}

/// POST /api/gpt-post-suggestion
pub async fn suggest_post_idea(
    state: web::Data<AppState>,
    req: web::Json<SuggestionRequest>,
) -> Result<HttpResponse> {
    let suggestion = state
        .suggestions
        .suggest_post_idea(req.topic.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(SuggestionResponse { suggestion }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_string_topic_is_ignored() {
        for body in [
            r#"{"topic": 5}"#,
            r#"{"topic": false}"#,
            r#"{"topic": null}"#,
            r#"{"topic": ["travel"]}"#,
            r#"{}"#,
        ] {
            let req: SuggestionRequest = serde_json::from_str(body).unwrap();
            assert!(req.topic.is_none(), "{body}");
        }

        let req: SuggestionRequest = serde_json::from_str(r#"{"topic": "travel"}"#).unwrap();
        assert_eq!(req.topic.as_deref(), Some("travel"));
    }
}

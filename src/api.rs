use crate::types::ChatMessage;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// The one message shown to the user for any failed send, regardless of
/// whether the network, the status code, or the response body was at fault.
pub const ERROR_REPLY: &str = "Error: Unable to fetch reply.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("completion endpoint returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("completion response missing choices[0].message.content")]
    MalformedResponse,
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Client for an OpenAI-compatible `chat/completions` endpoint.
#[derive(Clone)]
pub struct CompletionClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl CompletionClient {
    /// Reads `A4F_BASE_URL` and `A4F_API_KEY` from the environment. Neither
    /// is validated here; a missing key surfaces as an auth failure from the
    /// backend through the ordinary error path.
    pub fn from_env() -> Self {
        let base_url = env::var("A4F_BASE_URL").unwrap_or_default();
        let api_key = env::var("A4F_API_KEY").unwrap_or_default();
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    /// Sends a single message (no prior history) and returns the reply text.
    pub async fn complete(&self, model: &str, message: ChatMessage) -> ApiResult<String> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let messages = [message];
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&CompletionRequest {
                model,
                messages: &messages,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status { status, body });
        }
        extract_reply(&body)
    }
}

/// Pulls the assistant text out of a completion response body.
pub fn extract_reply(body: &str) -> ApiResult<String> {
    let parsed: CompletionResponse =
        serde_json::from_str(body).map_err(|_| ApiError::MalformedResponse)?;
    parsed
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or(ApiError::MalformedResponse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MessageContent, Role};

    #[test]
    fn extracts_first_choice_content() {
        let body = r#"{"choices":[{"message":{"content":"hello"}},{"message":{"content":"ignored"}}]}"#;
        assert_eq!(extract_reply(body).unwrap(), "hello");
    }

    #[test]
    fn empty_choices_is_malformed() {
        assert!(matches!(
            extract_reply(r#"{"choices":[]}"#),
            Err(ApiError::MalformedResponse)
        ));
    }

    #[test]
    fn non_json_body_is_malformed() {
        assert!(matches!(
            extract_reply("<html>502 Bad Gateway</html>"),
            Err(ApiError::MalformedResponse)
        ));
    }

    #[test]
    fn request_carries_exactly_one_message() {
        let messages = [ChatMessage {
            role: Role::User,
            content: MessageContent::Text("hi".to_string()),
            created_at: None,
        }];
        let request = CompletionRequest {
            model: "provider-6/gpt-4.1",
            messages: &messages,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "provider-6/gpt-4.1",
                "messages": [{ "role": "user", "content": "hi" }]
            })
        );
    }
}

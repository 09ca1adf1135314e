use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, CompletionError};

/// Token usage as reported by the completion endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub(crate) struct Usage {
    pub(crate) prompt_tokens: i64,
    pub(crate) completion_tokens: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Completion {
    pub(crate) content: Option<String>,
    pub(crate) usage: Option<Usage>,
}

/// A text-completion backend
pub(crate) trait CompletionClient {
    fn complete(&self, model: &str, prompt: &str) -> Result<Completion, CompletionError>;
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    /// Decoded separately; an incomplete usage object is dropped, not fatal
    #[serde(default)]
    usage: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// Show only the head and tail of an API key.
pub(crate) fn mask_key(key: &str) -> String {
    let len = key.len();
    if len <= 11 || !key.is_ascii() {
        return "***".to_string();
    }
    format!("{}***{}", &key[..7], &key[len - 4..])
}

/// OpenAI-compatible chat completions client (blocking, single attempt)
pub(crate) struct OpenAiClient {
    agent: ureq::Agent,
    endpoint: String,
    api_key: String,
}

impl OpenAiClient {
    pub(crate) fn new(api_base: &str, api_key: String, timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self {
            agent,
            endpoint: format!("{}/chat/completions", api_base.trim_end_matches('/')),
            api_key,
        }
    }

    /// Build a client with the key taken from the `api_key_env` variable.
    pub(crate) fn from_env(
        api_base: &str,
        api_key_env: &str,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let api_key = std::env::var(api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| AppError::MissingApiKey {
                var: api_key_env.to_string(),
            })?;
        tracing::debug!(
            endpoint = api_base,
            key = %mask_key(&api_key),
            timeout_secs = timeout.as_secs(),
            "completion client ready"
        );
        Ok(Self::new(api_base, api_key, timeout))
    }
}

impl CompletionClient for OpenAiClient {
    fn complete(&self, model: &str, prompt: &str) -> Result<Completion, CompletionError> {
        let request = ChatRequest {
            model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        tracing::debug!(endpoint = %self.endpoint, model, "sending completion request");
        let response = self
            .agent
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send_json(&request)?;

        let mut body = response.into_body();
        let parsed: ChatResponse =
            serde_json::from_reader(body.as_reader()).map_err(CompletionError::Malformed)?;
        parse_completion(parsed)
    }
}

fn parse_completion(response: ChatResponse) -> Result<Completion, CompletionError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(CompletionError::NoChoices)?;
    let usage = response
        .usage
        .and_then(|raw| match serde_json::from_value::<Usage>(raw) {
            Ok(usage) => Some(usage),
            Err(e) => {
                tracing::warn!("ignoring unusable usage in completion response: {e}");
                None
            }
        });
    Ok(Completion {
        content: choice.message.content,
        usage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_key_hides_middle() {
        assert_eq!(mask_key("sk-proj-abcdefghijklmnop"), "sk-proj***mnop");
        assert_eq!(mask_key("short"), "***");
    }

    #[test]
    fn endpoint_joins_base_without_double_slash() {
        let client = OpenAiClient::new(
            "http://localhost:8080/v1/",
            "key".to_string(),
            Duration::from_secs(1),
        );
        assert_eq!(client.endpoint, "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn request_wire_format() {
        let request = ChatRequest {
            model: "o3-mini",
            messages: [ChatMessage {
                role: "user",
                content: "hi",
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "o3-mini",
                "messages": [{"role": "user", "content": "hi"}]
            })
        );
    }

    #[test]
    fn parse_response_with_usage() {
        let response: ChatResponse = serde_json::from_str(
            r##"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"# Summary"}}],"usage":{"prompt_tokens":120,"completion_tokens":30,"total_tokens":150}}"##,
        )
        .unwrap();
        let completion = parse_completion(response).unwrap();
        assert_eq!(completion.content.as_deref(), Some("# Summary"));
        assert_eq!(
            completion.usage,
            Some(Usage {
                prompt_tokens: 120,
                completion_tokens: 30
            })
        );
    }

    #[test]
    fn parse_response_partial_usage_keeps_content() {
        let response: ChatResponse = serde_json::from_str(
            r##"{"choices":[{"message":{"content":"# Summary"}}],"usage":{"prompt_tokens":120,"total_tokens":120}}"##,
        )
        .unwrap();
        let completion = parse_completion(response).unwrap();
        assert_eq!(completion.content.as_deref(), Some("# Summary"));
        assert_eq!(completion.usage, None);
    }

    #[test]
    fn parse_response_null_usage() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"ok"}}],"usage":null}"#,
        )
        .unwrap();
        assert_eq!(parse_completion(response).unwrap().usage, None);
    }

    #[test]
    fn parse_response_null_content() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        let completion = parse_completion(response).unwrap();
        assert_eq!(completion.content, None);
        assert_eq!(completion.usage, None);
    }

    #[test]
    fn parse_response_without_choices_fails() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            parse_completion(response),
            Err(CompletionError::NoChoices)
        ));
    }

    #[test]
    fn from_env_requires_key() {
        let err = OpenAiClient::from_env(
            "http://localhost",
            "DOCSCOPE_TEST_KEY_THAT_IS_NEVER_SET",
            Duration::from_secs(1),
        )
        .err()
        .unwrap();
        assert!(matches!(err, AppError::MissingApiKey { .. }));
    }
}

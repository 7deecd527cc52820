//! OpenAI-compatible chat-completions gateway.
//!
//! Speaks `POST <base_url>/v1/chat/completions`, which Groq, OpenAI and most
//! self-hosted servers accept. One non-streaming request per call, bounded by
//! the client timeout.

use crate::config::FileModelConfig;
use async_trait::async_trait;
use searchlight_application::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use searchlight_domain::util::preview;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// [`LlmGateway`] over an OpenAI-compatible HTTP API.
#[derive(Debug, Clone)]
pub struct OpenAiCompatGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenAiCompatGateway {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
        })
    }

    /// Build from the `[model]` section, resolving the API key from the environment.
    pub fn from_config(config: &FileModelConfig) -> Result<Self, GatewayError> {
        Self::new(
            config.base_url.clone(),
            config.resolve_api_key(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint_chat_completions(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl LlmGateway for OpenAiCompatGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        let body = ChatCompletionsRequest {
            model: request.config.model.as_str(),
            messages: request
                .messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            temperature: request.config.temperature,
            max_tokens: request.config.max_tokens,
            stream: false,
        };

        debug!(
            "POST {} (model: {}, {} messages)",
            self.endpoint_chat_completions(),
            body.model,
            body.messages.len()
        );

        let mut rb = self
            .client
            .post(self.endpoint_chat_completions())
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(key) = &self.api_key {
            rb = rb.header(reqwest::header::AUTHORIZATION, format!("Bearer {key}"));
        }

        let resp = rb.json(&body).send().await.map_err(map_send_error)?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(format!(
                "chat.completions HTTP {}: {}",
                status.as_u16(),
                preview(&detail, 200)
            )));
        }

        let parsed: ChatCompletionsResponse = resp
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.unwrap_or_default())
            .ok_or_else(|| GatewayError::InvalidResponse("no choices in response".to_string()))
    }
}

fn map_send_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionsRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionsResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::HeaderMap, http::StatusCode, routing::post};
    use searchlight_domain::{Message, ModelConfig};
    use crate::test_support::serve;
    use std::sync::{Arc, Mutex};

    fn request() -> CompletionRequest {
        CompletionRequest::new(
            ModelConfig::default().with_temperature(0.4),
            vec![Message::system("be brief"), Message::user("hi")],
        )
    }

    #[tokio::test]
    async fn test_sends_openai_shape_and_reads_first_choice() {
        let seen: Arc<Mutex<Option<(String, serde_json::Value)>>> = Arc::new(Mutex::new(None));
        let seen_clone = seen.clone();
        let app = Router::new().route(
            "/openai/v1/chat/completions",
            post(move |headers: HeaderMap, Json(body): Json<serde_json::Value>| {
                let seen = seen_clone.clone();
                async move {
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("")
                        .to_string();
                    *seen.lock().unwrap() = Some((auth, body));
                    Json(serde_json::json!({
                        "choices": [{"message": {"role": "assistant", "content": "hey there"}}]
                    }))
                }
            }),
        );
        let addr = serve(app).await;

        let gateway = OpenAiCompatGateway::new(
            format!("http://{}/openai/", addr),
            Some("gsk-test".to_string()),
            Duration::from_secs(5),
        )
        .unwrap();

        let reply = gateway.complete(&request()).await.unwrap();
        assert_eq!(reply, "hey there");

        let (auth, body) = seen.lock().unwrap().clone().unwrap();
        assert_eq!(auth, "Bearer gsk-test");
        assert_eq!(body["model"], "llama-3.1-8b-instant");
        assert_eq!(body["stream"], false);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "hi");
        assert!(body.get("max_tokens").is_none());
        let temperature = body["temperature"].as_f64().unwrap();
        assert!((temperature - 0.4).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_http_error_status_is_request_failed() {
        let app = Router::new().route(
            "/v1/chat/completions",
            post(|| async { (StatusCode::UNAUTHORIZED, "invalid api key") }),
        );
        let addr = serve(app).await;

        let gateway =
            OpenAiCompatGateway::new(format!("http://{}", addr), None, Duration::from_secs(5))
                .unwrap();
        let err = gateway.complete(&request()).await.unwrap_err();
        match err {
            GatewayError::RequestFailed(msg) => {
                assert!(msg.contains("401"));
                assert!(msg.contains("invalid api key"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_choices_is_invalid_response() {
        let app = Router::new().route(
            "/v1/chat/completions",
            post(|| async { Json(serde_json::json!({"choices": []})) }),
        );
        let addr = serve(app).await;

        let gateway =
            OpenAiCompatGateway::new(format!("http://{}", addr), None, Duration::from_secs(5))
                .unwrap();
        let err = gateway.complete(&request()).await.unwrap_err();
        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_slow_server_times_out() {
        let app = Router::new().route(
            "/v1/chat/completions",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Json(serde_json::json!({"choices": []}))
            }),
        );
        let addr = serve(app).await;

        let gateway =
            OpenAiCompatGateway::new(format!("http://{}", addr), None, Duration::from_millis(100))
                .unwrap();
        let err = gateway.complete(&request()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Timeout));
    }
}

//! LLM Gateway port
//!
//! Defines the interface for communicating with the chat-completion provider.

use async_trait::async_trait;
use searchlight_domain::{Message, ModelConfig};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Not configured: {0}")]
    NotConfigured(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// One chat-completion call: an ordered message list plus sampling settings.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub config: ModelConfig,
    pub messages: Vec<Message>,
}

impl CompletionRequest {
    pub fn new(config: ModelConfig, messages: Vec<Message>) -> Self {
        Self { config, messages }
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to the model provider.
/// Implementations (adapters) live in the infrastructure layer and must
/// bound every call with a timeout.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send the messages and return the reply text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError>;
}

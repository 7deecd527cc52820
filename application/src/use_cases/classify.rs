//! Classify use case.
//!
//! Decides whether a user message needs a web search. One completion call
//! with the router prompt; the reply is interpreted by
//! [`RouteDecision::from_classifier_output`]. The model is sampled, so the
//! same message may route differently across runs.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use searchlight_domain::util::preview;
use searchlight_domain::{Message, ModelConfig, PromptTemplate, RouteDecision};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Routing failed because the model call failed. Not retried.
#[derive(Error, Debug)]
#[error("Classification failed: {0}")]
pub struct ClassifyError(#[from] pub GatewayError);

/// Use case for routing a user message to search or chat.
#[derive(Clone)]
pub struct ClassifyUseCase {
    gateway: Arc<dyn LlmGateway>,
    model: ModelConfig,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ClassifyUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, model: ModelConfig) -> Self {
        Self {
            gateway,
            model,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Classify the latest user message.
    pub async fn execute(&self, last_user_message: &str) -> Result<RouteDecision, ClassifyError> {
        info!("[Router] Deciding if search is needed...");

        let request = CompletionRequest::new(
            self.model.clone(),
            vec![
                Message::system(PromptTemplate::router_system()),
                Message::user(last_user_message),
            ],
        );

        let raw = self.gateway.complete(&request).await?;
        let decision = RouteDecision::from_classifier_output(&raw);

        debug!("[Router] Raw output: {}", preview(&raw, 80));
        info!("[Router] Decision: {}", decision);

        self.conversation_logger.log(ConversationEvent::new(
            "route_decision",
            serde_json::json!({
                "model": self.model.model.to_string(),
                "query": last_user_message,
                "raw": raw,
                "decision": decision.as_str(),
            }),
        ));

        Ok(decision)
    }
}

//! Respond use case.
//!
//! Produces the final reply: one completion call with the persona system
//! prompt (plus grounding context when the turn searched) followed by the
//! full message history.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use searchlight_domain::util::preview;
use searchlight_domain::{Message, ModelConfig, PromptTemplate, RetrievalMode};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors from the responder. Never retried, never replaced by fallback text.
#[derive(Error, Debug)]
pub enum RespondError {
    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),

    #[error("No response from model")]
    EmptyResponse,
}

/// Use case for the Responding phase.
#[derive(Clone)]
pub struct RespondUseCase {
    gateway: Arc<dyn LlmGateway>,
    model: ModelConfig,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl RespondUseCase {
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

    /// Generate a reply for `history`.
    ///
    /// `mode` only selects the wording of the grounding block and is ignored
    /// when `context` is `None`.
    pub async fn execute(
        &self,
        history: &[Message],
        context: Option<&str>,
        mode: RetrievalMode,
    ) -> Result<String, RespondError> {
        info!("[Chat] Thinking...");

        let system = PromptTemplate::responder_system(context, mode);
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(Message::system(system));
        messages.extend_from_slice(history);

        debug!(
            "[Chat] Sending {} messages (context: {} bytes)",
            messages.len(),
            context.map_or(0, str::len)
        );

        let request = CompletionRequest::new(self.model.clone(), messages);
        let reply = self.gateway.complete(&request).await?;
        let reply = reply.trim().to_string();

        if reply.is_empty() {
            return Err(RespondError::EmptyResponse);
        }

        info!("[Chat] Done: {}", preview(&reply, 120));

        self.conversation_logger.log(ConversationEvent::new(
            "llm_response",
            serde_json::json!({
                "model": self.model.model.to_string(),
                "grounded": context.is_some(),
                "bytes": reply.len(),
                "text": reply,
            }),
        ));

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::mocks::{RecordingLogger, ScriptedGateway};
    use searchlight_domain::Role;

    fn use_case(reply: Result<&str, &str>) -> (RespondUseCase, Arc<ScriptedGateway>) {
        let gateway = Arc::new(ScriptedGateway::new(vec![reply]));
        (
            RespondUseCase::new(gateway.clone(), ModelConfig::default()),
            gateway,
        )
    }

    #[tokio::test]
    async fn test_prepends_system_prompt_to_history() {
        let (uc, gateway) = use_case(Ok("Why did the crab never share? Shellfish."));
        let history = vec![Message::user("Tell me a joke")];

        let reply = uc
            .execute(&history, None, RetrievalMode::Structured)
            .await
            .unwrap();
        assert_eq!(reply, "Why did the crab never share? Shellfish.");

        let request = &gateway.requests()[0];
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(request.messages[0].content, PromptTemplate::persona());
        assert_eq!(request.messages[1], history[0]);
    }

    #[tokio::test]
    async fn test_context_is_embedded_in_system_prompt() {
        let (uc, gateway) = use_case(Ok("It's sunny."));
        uc.execute(
            &[Message::user("weather?")],
            Some("Paris: 24°C"),
            RetrievalMode::Summary,
        )
        .await
        .unwrap();

        let system = &gateway.requests()[0].messages[0].content;
        assert!(system.contains("Web search results:\nParis: 24°C"));
    }

    #[tokio::test]
    async fn test_gateway_failure_propagates() {
        let (uc, _) = use_case(Err("rate limited"));
        let err = uc
            .execute(&[Message::user("hi")], None, RetrievalMode::Structured)
            .await
            .unwrap_err();
        assert!(matches!(err, RespondError::GatewayError(_)));
    }

    #[tokio::test]
    async fn test_blank_reply_is_error() {
        let (uc, _) = use_case(Ok("  \n"));
        let err = uc
            .execute(&[Message::user("hi")], None, RetrievalMode::Structured)
            .await
            .unwrap_err();
        assert!(matches!(err, RespondError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_logs_response_event() {
        let logger = Arc::new(RecordingLogger::default());
        let (uc, _) = use_case(Ok("hey!"));
        let uc = uc.with_conversation_logger(logger.clone());
        uc.execute(&[Message::user("yo")], Some("ctx"), RetrievalMode::Structured)
            .await
            .unwrap();

        let payload = logger.payload("llm_response").unwrap();
        assert_eq!(payload["grounded"], true);
        assert_eq!(payload["text"], "hey!");
    }
}

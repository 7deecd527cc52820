//! Run Turn use case.
//!
//! Drives one user message through the fixed turn graph:
//!
//! ```text
//! Routing → [Searching → [Fetching]] → Responding → Done
//! ```
//!
//! Search and fetch failures degrade the context but never end the turn.
//! Routing and responding failures do, and are returned to the caller.

use crate::config::TurnParams;
use crate::ports::article_reader::ArticleReader;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::ProgressNotifier;
use crate::ports::search_provider::SearchProvider;
use crate::use_cases::classify::{ClassifyError, ClassifyUseCase};
use crate::use_cases::fetch_articles::FetchArticlesUseCase;
use crate::use_cases::respond::{RespondError, RespondUseCase};
use crate::use_cases::retrieve::RetrieveUseCase;
use searchlight_domain::util::truncate_str;
use searchlight_domain::{
    DomainError, ModelConfig, Query, RetrievedContext, TurnOutcome, TurnPhase, TurnState,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that end a turn without a reply.
#[derive(Error, Debug)]
pub enum RunTurnError {
    #[error("Invalid query: {0}")]
    InvalidQuery(DomainError),

    #[error(transparent)]
    Classification(#[from] ClassifyError),

    #[error("Response failed: {0}")]
    Response(#[from] RespondError),

    #[error("Internal error: {0}")]
    Internal(DomainError),
}

/// Use case for running a single turn.
#[derive(Clone)]
pub struct RunTurnUseCase {
    classify: ClassifyUseCase,
    retrieve: RetrieveUseCase,
    fetch: FetchArticlesUseCase,
    respond: RespondUseCase,
    params: TurnParams,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl RunTurnUseCase {
    /// Wire the stages from their adapters. Adapters are shared across turns.
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        search: Arc<dyn SearchProvider>,
        reader: Arc<dyn ArticleReader>,
        model: ModelConfig,
        params: TurnParams,
    ) -> Self {
        Self {
            classify: ClassifyUseCase::new(gateway.clone(), model.clone()),
            retrieve: RetrieveUseCase::new(search),
            fetch: FetchArticlesUseCase::new(reader, params.fetch_timeout)
                .with_parallel(params.parallel_fetch),
            respond: RespondUseCase::new(gateway, model),
            params,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger, shared by every stage.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.classify = self.classify.with_conversation_logger(logger.clone());
        self.respond = self.respond.with_conversation_logger(logger.clone());
        self.conversation_logger = logger;
        self
    }

    pub fn params(&self) -> &TurnParams {
        &self.params
    }

    /// Run one turn for `query`.
    pub async fn execute(
        &self,
        query: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<TurnOutcome, RunTurnError> {
        let query = Query::new(query).map_err(RunTurnError::InvalidQuery)?;
        let mode = self.params.mode;

        info!("Starting turn: {}", truncate_str(query.content(), 100));
        self.conversation_logger.log(ConversationEvent::new(
            "turn_start",
            serde_json::json!({
                "query": query.content(),
                "mode": mode.as_str(),
            }),
        ));

        let mut state = TurnState::new(query, mode);

        // Routing
        progress.on_phase_start(TurnPhase::Routing);
        let route = self.classify.execute(state.last_user_message()).await?;
        state.record_route(route);
        progress.on_route_decided(route);
        progress.on_phase_complete(TurnPhase::Routing);

        let mut results_found = 0;
        let mut articles_fetched = 0;

        if state.needs_search() {
            self.enter(&mut state, TurnPhase::Searching, progress)?;
            let retrieved = self.retrieve.execute(state.last_user_message(), mode).await;
            if let Some(records) = retrieved.records() {
                results_found = records.len();
            }
            self.conversation_logger.log(ConversationEvent::new(
                "search_results",
                serde_json::json!({
                    "mode": mode.as_str(),
                    "results": results_found,
                    "context": retrieved,
                }),
            ));
            state.set_context(retrieved);
            progress.on_phase_complete(TurnPhase::Searching);

            if mode.fetches_articles() {
                self.enter(&mut state, TurnPhase::Fetching, progress)?;
                let records = match state.take_context() {
                    RetrievedContext::StructuredResults(records) => records,
                    _ => Vec::new(),
                };
                let articles = self
                    .fetch
                    .execute_with_progress(&records, self.params.fetch_limit, progress)
                    .await;
                articles_fetched = articles.fetched;
                self.conversation_logger.log(ConversationEvent::new(
                    "articles_fetched",
                    serde_json::json!({
                        "attempted": articles.attempted,
                        "fetched": articles.fetched,
                        "bytes": articles.text.len(),
                    }),
                ));
                state.set_context(RetrievedContext::RenderedText(articles.text));
                progress.on_phase_complete(TurnPhase::Fetching);
            }
        }

        // Responding
        self.enter(&mut state, TurnPhase::Responding, progress)?;
        let reply = self
            .respond
            .execute(state.messages(), state.context().as_text(), mode)
            .await?;
        state
            .record_response(reply.clone())
            .map_err(RunTurnError::Internal)?;
        progress.on_phase_complete(TurnPhase::Responding);

        state
            .advance(TurnPhase::Done)
            .map_err(RunTurnError::Internal)?;

        let outcome = TurnOutcome {
            response: reply,
            route,
            mode,
            results_found,
            articles_fetched,
            messages: state.into_messages(),
        };

        self.conversation_logger.log(ConversationEvent::new(
            "turn_complete",
            serde_json::json!({
                "route": route.as_str(),
                "results_found": results_found,
                "articles_fetched": articles_fetched,
                "response_bytes": outcome.response.len(),
            }),
        ));

        Ok(outcome)
    }

    fn enter(
        &self,
        state: &mut TurnState,
        phase: TurnPhase,
        progress: &dyn ProgressNotifier,
    ) -> Result<(), RunTurnError> {
        state.advance(phase).map_err(RunTurnError::Internal)?;
        progress.on_phase_start(phase);
        Ok(())
    }
}

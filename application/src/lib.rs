//! Application layer for searchlight
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::TurnParams;
pub use ports::{
    article_reader::{ArticleReader, FetchError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{CompletionRequest, GatewayError, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
    search_provider::{SearchError, SearchProvider},
};
pub use use_cases::classify::{ClassifyError, ClassifyUseCase};
pub use use_cases::fetch_articles::{FetchArticlesUseCase, FetchedArticles};
pub use use_cases::respond::{RespondError, RespondUseCase};
pub use use_cases::retrieve::RetrieveUseCase;
pub use use_cases::run_turn::{RunTurnError, RunTurnUseCase};

//! Hand-written port doubles shared by the use case tests.

use crate::ports::article_reader::{ArticleReader, FetchError};
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use crate::ports::progress::ProgressNotifier;
use crate::ports::search_provider::{SearchError, SearchProvider};
use async_trait::async_trait;
use searchlight_domain::{ResultRecord, RouteDecision, TurnPhase};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

// ==================== LLM ====================

/// Replies are handed out in order; `Err(msg)` becomes `RequestFailed(msg)`.
pub struct ScriptedGateway {
    replies: Mutex<VecDeque<Result<String, String>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedGateway {
    pub fn new(replies: Vec<Result<&str, &str>>) -> Self {
        Self {
            replies: Mutex::new(
                replies
                    .into_iter()
                    .map(|r| r.map(str::to_string).map_err(str::to_string))
                    .collect(),
            ),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(msg)) => Err(GatewayError::RequestFailed(msg)),
            None => Err(GatewayError::Other("No more replies".to_string())),
        }
    }
}

// ==================== Search ====================

pub struct StubSearch {
    records: Result<Vec<ResultRecord>, String>,
    summary: Result<String, String>,
    calls: AtomicUsize,
}

impl StubSearch {
    pub fn with_records(records: Vec<ResultRecord>) -> Self {
        Self {
            records: Ok(records),
            summary: Ok("digest".to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_summary(summary: &str) -> Self {
        Self {
            records: Ok(Vec::new()),
            summary: Ok(summary.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            records: Err(msg.to_string()),
            summary: Err(msg.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SearchProvider for StubSearch {
    fn name(&self) -> &str {
        "stub"
    }

    async fn search_results(&self, _query: &str) -> Result<Vec<ResultRecord>, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.records.clone().map_err(SearchError::RequestFailed)
    }

    async fn search_summary(&self, _query: &str) -> Result<String, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.summary.clone().map_err(SearchError::RequestFailed)
    }
}

// ==================== Articles ====================

/// Serves canned article text per URL; unknown URLs fail with a network error.
#[derive(Default)]
pub struct StubReader {
    pages: HashMap<String, String>,
    delays: HashMap<String, Duration>,
    visited: Mutex<Vec<String>>,
}

impl StubReader {
    pub fn page(mut self, url: &str, text: &str) -> Self {
        self.pages.insert(url.to_string(), text.to_string());
        self
    }

    pub fn delay(mut self, url: &str, delay: Duration) -> Self {
        self.delays.insert(url.to_string(), delay);
        self
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArticleReader for StubReader {
    async fn read_article(&self, url: &str) -> Result<String, FetchError> {
        self.visited.lock().unwrap().push(url.to_string());
        if let Some(delay) = self.delays.get(url) {
            tokio::time::sleep(*delay).await;
        }
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::RequestFailed(format!("connection refused: {}", url)))
    }
}

// ==================== Observers ====================

#[derive(Default)]
pub struct RecordingLogger {
    events: Mutex<Vec<(&'static str, serde_json::Value)>>,
}

impl RecordingLogger {
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(|(t, _)| *t).collect()
    }

    pub fn payload(&self, event_type: &str) -> Option<serde_json::Value> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .find(|(t, _)| *t == event_type)
            .map(|(_, p)| p.clone())
    }
}

impl ConversationLogger for RecordingLogger {
    fn log(&self, event: ConversationEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type, event.payload));
    }
}

#[derive(Default)]
pub struct RecordingProgress {
    started: Mutex<Vec<TurnPhase>>,
    completed: Mutex<Vec<TurnPhase>>,
    decisions: Mutex<Vec<RouteDecision>>,
}

impl RecordingProgress {
    pub fn started(&self) -> Vec<TurnPhase> {
        self.started.lock().unwrap().clone()
    }

    pub fn completed(&self) -> Vec<TurnPhase> {
        self.completed.lock().unwrap().clone()
    }

    pub fn decisions(&self) -> Vec<RouteDecision> {
        self.decisions.lock().unwrap().clone()
    }
}

impl ProgressNotifier for RecordingProgress {
    fn on_phase_start(&self, phase: TurnPhase) {
        self.started.lock().unwrap().push(phase);
    }

    fn on_phase_complete(&self, phase: TurnPhase) {
        self.completed.lock().unwrap().push(phase);
    }

    fn on_route_decided(&self, decision: RouteDecision) {
        self.decisions.lock().unwrap().push(decision);
    }
}

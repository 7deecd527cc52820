//! Turn parameters: pipeline shape and fetch bounds.
//!
//! [`TurnParams`] groups the static parameters that control one run of
//! [`RunTurnUseCase`](crate::use_cases::run_turn::RunTurnUseCase).
//! These are application-layer concerns, not domain policy.

use searchlight_domain::RetrievalMode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of result links fetched per turn.
pub const DEFAULT_FETCH_LIMIT: usize = 2;

/// Default per-link fetch bound.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Pipeline control parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnParams {
    /// Summary (no fetch) or structured (fetch top links).
    pub mode: RetrievalMode,
    /// How many leading result records are considered for fetching.
    pub fetch_limit: usize,
    /// Fetch the bounded link set concurrently instead of one by one.
    pub parallel_fetch: bool,
    /// Upper bound for a single article read, enforced around the reader.
    pub fetch_timeout: Duration,
}

impl Default for TurnParams {
    fn default() -> Self {
        Self {
            mode: RetrievalMode::default(),
            fetch_limit: DEFAULT_FETCH_LIMIT,
            parallel_fetch: false,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

impl TurnParams {
    // ==================== Builder Methods ====================

    pub fn with_mode(mut self, mode: RetrievalMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_fetch_limit(mut self, limit: usize) -> Self {
        self.fetch_limit = limit;
        self
    }

    pub fn with_parallel_fetch(mut self, parallel: bool) -> Self {
        self.parallel_fetch = parallel;
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }
}

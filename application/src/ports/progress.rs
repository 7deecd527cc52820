//! Progress notification port
//!
//! Defines the interface for reporting progress while a turn runs.

use searchlight_domain::{RouteDecision, TurnPhase};

/// Callback for progress updates during a turn
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (status lines, spinners, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts
    fn on_phase_start(&self, phase: TurnPhase);

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: TurnPhase);

    /// Called once the router has decided
    fn on_route_decided(&self, _decision: RouteDecision) {}

    /// Called for each attempted article link
    fn on_article(&self, _url: &str, _success: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: TurnPhase) {}
    fn on_phase_complete(&self, _phase: TurnPhase) {}
}

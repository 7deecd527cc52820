//! Progress reporting for turn execution

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use searchlight_application::ports::progress::{NoProgress, ProgressNotifier};
use searchlight_domain::{RouteDecision, TurnPhase};
use std::io::IsTerminal;
use std::sync::Mutex;
use std::time::Duration;

/// Status line shown while a phase runs
fn phase_message(phase: TurnPhase) -> &'static str {
    match phase {
        TurnPhase::Routing => "Deciding if search is needed...",
        TurnPhase::Searching => "Fetching from web...",
        TurnPhase::Fetching => "Reading full articles...",
        TurnPhase::Responding => "Thinking...",
        TurnPhase::Done => "Done",
    }
}

fn phase_tag(phase: TurnPhase) -> String {
    format!("[{}]", phase.display_name())
}

/// Which progress notifier a turn gets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressKind {
    /// [`ProgressReporter`]
    Spinner,
    /// [`SimpleProgress`]
    Lines,
    /// No progress output
    Off,
}

impl ProgressKind {
    /// Spinners only on a terminal; piped stderr gets plain lines.
    pub fn select(enabled: bool, terminal: bool) -> Self {
        match (enabled, terminal) {
            (false, _) => ProgressKind::Off,
            (true, true) => ProgressKind::Spinner,
            (true, false) => ProgressKind::Lines,
        }
    }

    /// [`select`](Self::select) against the process's stderr.
    pub fn for_stderr(enabled: bool) -> Self {
        Self::select(enabled, std::io::stderr().is_terminal())
    }

    pub fn is_enabled(self) -> bool {
        self != ProgressKind::Off
    }

    /// A fresh notifier for one turn
    pub fn notifier(self) -> Box<dyn ProgressNotifier> {
        match self {
            ProgressKind::Spinner => Box::new(ProgressReporter::new()),
            ProgressKind::Lines => Box::new(SimpleProgress),
            ProgressKind::Off => Box::new(NoProgress),
        }
    }
}

/// Reports progress with a spinner per phase (to stderr)
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
    route: Mutex<Option<RouteDecision>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            route: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn println(&self, line: String) {
        match self.spinner.lock().ok().and_then(|s| s.clone()) {
            Some(pb) => pb.println(line),
            None => eprintln!("{}", line),
        }
    }
}

// A failed turn never completes its phase
impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Ok(slot) = self.spinner.get_mut()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: TurnPhase) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(phase_tag(phase));
        pb.set_message(phase_message(phase));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_route_decided(&self, decision: RouteDecision) {
        if let Ok(mut route) = self.route.lock() {
            *route = Some(decision);
        }
    }

    fn on_article(&self, url: &str, success: bool) {
        let line = if success {
            format!("  {} {}", "v".green(), url)
        } else {
            format!("  {} {} (skipped)", "x".red(), url.dimmed())
        };
        self.println(line);
    }

    fn on_phase_complete(&self, phase: TurnPhase) {
        let Some(pb) = self.spinner.lock().ok().and_then(|mut s| s.take()) else {
            return;
        };
        pb.finish_and_clear();

        let detail = match phase {
            TurnPhase::Routing => self
                .route
                .lock()
                .ok()
                .and_then(|r| *r)
                .map(|r| format!("Decision: {}", r))
                .unwrap_or_else(|| "Decided".to_string()),
            _ => "done".to_string(),
        };
        eprintln!(
            "{} {} {}",
            "v".green(),
            phase_tag(phase).cyan().bold(),
            detail
        );
    }
}

/// Simple text-based progress (no spinner), one line per event on stderr
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: TurnPhase) {
        eprintln!("{} {}", phase_tag(phase).cyan(), phase_message(phase));
    }

    fn on_route_decided(&self, decision: RouteDecision) {
        eprintln!("{} Decision: {}", phase_tag(TurnPhase::Routing).cyan(), decision);
    }

    fn on_article(&self, url: &str, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), url);
        } else {
            eprintln!("  {} {} (skipped)", "x".red(), url);
        }
    }

    fn on_phase_complete(&self, _phase: TurnPhase) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_phase_has_a_message() {
        for phase in [
            TurnPhase::Routing,
            TurnPhase::Searching,
            TurnPhase::Fetching,
            TurnPhase::Responding,
        ] {
            assert!(!phase_message(phase).is_empty());
        }
        assert_eq!(phase_tag(TurnPhase::Routing), "[Router]");
        assert_eq!(phase_tag(TurnPhase::Responding), "[Chat]");
    }

    #[test]
    fn test_select_progress_kind() {
        assert_eq!(ProgressKind::select(true, true), ProgressKind::Spinner);
        assert_eq!(ProgressKind::select(true, false), ProgressKind::Lines);
        assert_eq!(ProgressKind::select(false, true), ProgressKind::Off);
        assert!(!ProgressKind::Off.is_enabled());
        assert!(ProgressKind::Lines.is_enabled());
    }

    #[test]
    fn test_drop_clears_unfinished_spinner() {
        let reporter = ProgressReporter::new();
        reporter.on_phase_start(TurnPhase::Routing);
        let spinner = reporter.spinner.lock().unwrap().clone().unwrap();
        assert!(!spinner.is_finished());

        // Routing failed: no on_phase_complete
        drop(reporter);
        assert!(spinner.is_finished());
    }

    #[test]
    fn test_reporter_survives_out_of_order_events() {
        let reporter = ProgressReporter::new();
        reporter.on_phase_complete(TurnPhase::Searching);
        reporter.on_phase_start(TurnPhase::Routing);
        reporter.on_route_decided(RouteDecision::Chat);
        reporter.on_phase_start(TurnPhase::Responding);
        reporter.on_phase_complete(TurnPhase::Responding);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}

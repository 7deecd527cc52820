//! Console output formatter for turn results

use colored::Colorize;
use searchlight_domain::{OutputFormat, TurnOutcome};

/// Width of the separator printed after each reply
pub const SEPARATOR_WIDTH: usize = 60;

/// Formats turn results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a finished turn in the requested format
    pub fn format(outcome: &TurnOutcome, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => Self::format_reply(outcome),
            OutputFormat::Json => Self::format_json(outcome),
        }
    }

    /// The reply block: label, response, separator
    pub fn format_reply(outcome: &TurnOutcome) -> String {
        format!(
            "\n{}\n{}\n\n{}",
            "Assistant:".green().bold(),
            outcome.response,
            Self::separator()
        )
    }

    /// Format as JSON
    pub fn format_json(outcome: &TurnOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    /// One dimmed line describing how the reply was produced
    pub fn format_route_summary(outcome: &TurnOutcome) -> String {
        let line = if outcome.searched() {
            if outcome.mode.fetches_articles() {
                format!(
                    "searched ({} mode): {} results, {} articles read",
                    outcome.mode, outcome.results_found, outcome.articles_fetched
                )
            } else {
                format!("searched ({} mode)", outcome.mode)
            }
        } else {
            "answered from model knowledge".to_string()
        };
        line.dimmed().to_string()
    }

    pub fn format_error(error: &dyn std::fmt::Display) -> String {
        format!("{} {}", "Error:".red().bold(), error)
    }

    fn separator() -> String {
        "-".repeat(SEPARATOR_WIDTH).dimmed().to_string()
    }
}

//! REPL (Read-Eval-Print Loop) for interactive chat
//!
//! Each non-empty line runs one independent turn. An empty line, EOF or
//! `/quit` ends the session.

use crate::config::{OutputConfig, ReplConfig};
use crate::ConsoleFormatter;
use searchlight_application::RunTurnUseCase;
use searchlight_domain::OutputFormat;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// What a line of input asks for
#[derive(Debug, PartialEq, Eq)]
enum ReplInput<'a> {
    Exit,
    Command(&'a str),
    Question(&'a str),
}

impl<'a> ReplInput<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            ReplInput::Exit
        } else if line.starts_with('/') {
            ReplInput::Command(line)
        } else {
            ReplInput::Question(line)
        }
    }
}

/// Interactive chat REPL
pub struct ChatRepl {
    use_case: RunTurnUseCase,
    repl: ReplConfig,
    output: OutputConfig,
    details: Vec<(&'static str, String)>,
}

impl ChatRepl {
    pub fn new(use_case: RunTurnUseCase) -> Self {
        Self {
            use_case,
            repl: ReplConfig::default(),
            output: OutputConfig::default(),
            details: Vec::new(),
        }
    }

    pub fn with_repl_config(mut self, config: ReplConfig) -> Self {
        self.repl = config;
        self
    }

    pub fn with_output_config(mut self, config: OutputConfig) -> Self {
        self.output = config;
        self
    }

    /// Add a `label: value` line to the welcome banner
    pub fn with_detail(mut self, label: &'static str, value: impl Into<String>) -> Self {
        self.details.push((label, value.into()));
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.repl.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline("You: ") {
                Ok(line) => match ReplInput::parse(&line) {
                    ReplInput::Exit => {
                        println!("Exiting.");
                        break;
                    }
                    ReplInput::Command(cmd) => {
                        if self.handle_command(cmd) {
                            break;
                        }
                    }
                    ReplInput::Question(question) => {
                        let _ = rl.add_history_entry(question);
                        self.process_question(question).await;
                    }
                },
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Exiting.");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("Searchlight chat (press Enter on an empty line to exit)");
        for (label, value) in &self.details {
            println!("  {:<8} {}", format!("{}:", label), value);
        }
        println!("Type /help for commands.");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Exiting.");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?     - Show this help");
                println!("  /config           - Show model and search settings");
                println!("  /quit, /exit, /q  - Exit chat");
                println!("  <empty line>      - Exit chat");
                println!();
                false
            }
            "/config" => {
                println!();
                for (label, value) in &self.details {
                    println!("  {:<8} {}", format!("{}:", label), value);
                }
                let params = self.use_case.params();
                println!("  {:<8} {}", "mode:", params.mode);
                println!(
                    "  {:<8} {} (parallel: {})",
                    "fetch:", params.fetch_limit, params.parallel_fetch
                );
                println!();
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_question(&self, question: &str) {
        let progress = self.repl.progress.notifier();
        let result = self.use_case.execute(question, progress.as_ref()).await;
        drop(progress);

        match result {
            Ok(outcome) => {
                println!("{}", ConsoleFormatter::format(&outcome, self.output.format));
                if self.output.format == OutputFormat::Text && self.repl.progress.is_enabled() {
                    println!("{}", ConsoleFormatter::format_route_summary(&outcome));
                }
            }
            Err(e) => {
                eprintln!("{}", ConsoleFormatter::format_error(&e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line_exits() {
        assert_eq!(ReplInput::parse(""), ReplInput::Exit);
        assert_eq!(ReplInput::parse("   \t"), ReplInput::Exit);
    }

    #[test]
    fn test_slash_is_command() {
        assert_eq!(ReplInput::parse(" /help "), ReplInput::Command("/help"));
    }

    #[test]
    fn test_question_is_trimmed() {
        assert_eq!(
            ReplInput::parse("  Tell me a joke \n"),
            ReplInput::Question("Tell me a joke")
        );
    }
}

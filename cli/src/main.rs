//! CLI entrypoint for searchlight
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use searchlight_application::{
    ConversationLogger, NoConversationLogger, RunTurnUseCase, SearchProvider,
};
use searchlight_domain::{Model, OutputFormat, SearchBackend};
use searchlight_infrastructure::{
    ConfigLoader, DuckDuckGoSearch, FileConfig, FileSearchConfig, FileTelemetryConfig,
    HttpArticleReader, JsonlConversationLogger, OpenAiCompatGateway, SerpApiSearch,
};
use searchlight_presentation::{ChatRepl, Cli, ConsoleFormatter, OutputConfig, ProgressKind, ReplConfig};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Credentials may live in a .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let _log_guard = init_logging(&cli)?;

    info!("Starting searchlight");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        match ConfigLoader::load(cli.config.as_ref()) {
            Ok(config) => config,
            Err(e) => bail!("Failed to load configuration: {}", e),
        }
    };
    apply_cli_overrides(&mut config, &cli);

    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            error!("Invalid configuration: {}", issue);
        } else {
            warn!("{}", issue);
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Configuration has errors; see messages above");
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let gateway = OpenAiCompatGateway::from_config(&config.model)?;
    if !gateway.has_api_key() {
        warn!(
            "{} is not set; model requests to {} will be unauthenticated",
            config.model.api_key_env,
            gateway.base_url()
        );
    }
    let search = build_search_provider(&config.search)?;
    let reader = HttpArticleReader::from_config(&config.fetch)?;
    let logger = build_conversation_logger(&config.telemetry);

    let search_name = search.name().to_string();
    let use_case = RunTurnUseCase::new(
        Arc::new(gateway),
        search,
        Arc::new(reader),
        config.model.to_model_config(),
        config.turn_params(),
    )
    .with_conversation_logger(logger);

    let output_format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // Single question mode
    if let Some(question) = cli.question.as_deref() {
        let progress = ProgressKind::for_stderr(!cli.quiet).notifier();
        let result = use_case.execute(question, progress.as_ref()).await;
        drop(progress);

        let outcome = result?;
        match output_format {
            OutputFormat::Text => println!("{}", outcome.response),
            OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&outcome)),
        }
        return Ok(());
    }

    // Interactive mode
    let repl = ChatRepl::new(use_case)
        .with_repl_config(ReplConfig {
            progress: ProgressKind::for_stderr(config.repl.show_progress && !cli.quiet),
            history_file: config.repl.history_file.clone(),
        })
        .with_output_config(OutputConfig {
            format: output_format,
            color: config.output.color,
        })
        .with_detail("model", config.model.name.to_string())
        .with_detail("search", search_name)
        .with_detail("mode", config.search.mode.to_string());

    repl.run().await?;
    Ok(())
}

/// Install the stderr subscriber (and the rolling file layer with `--log-dir`).
///
/// `RUST_LOG` wins over the `-v` count.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match &cli.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::daily(dir, "searchlight.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(mode) = cli.mode {
        config.search.mode = mode.into();
    }
    if let Some(model) = &cli.model {
        let Ok(model) = model.parse::<Model>();
        config.model.name = model;
    }
    if let Some(temperature) = cli.temperature {
        config.model.temperature = temperature;
    }
    if let Some(limit) = cli.fetch_limit {
        config.fetch.limit = limit;
    }
    if cli.parallel_fetch {
        config.fetch.parallel = true;
    }
    if let Some(provider) = cli.search_provider {
        config.search.provider = provider.into();
    }
}

/// SerpAPI when a key is available, DuckDuckGo otherwise.
fn build_search_provider(config: &FileSearchConfig) -> Result<Arc<dyn SearchProvider>> {
    let timeout = Duration::from_secs(config.timeout_seconds);

    if config.provider == SearchBackend::SerpApi {
        match SerpApiSearch::from_config(config) {
            Ok(search) => return Ok(Arc::new(search)),
            Err(e) => info!("SerpAPI unavailable ({}), using DuckDuckGo", e),
        }
    }

    Ok(Arc::new(DuckDuckGoSearch::new(timeout)?))
}

/// JSONL event log when configured; a log that cannot be opened is not fatal.
fn build_conversation_logger(config: &FileTelemetryConfig) -> Arc<dyn ConversationLogger> {
    let Some(path) = &config.log_file else {
        return Arc::new(NoConversationLogger);
    };

    match JsonlConversationLogger::open(path) {
        Ok(logger) => {
            info!(
                "Conversation log: {} (session {})",
                logger.path().display(),
                logger.session()
            );
            Arc::new(logger)
        }
        Err(e) => {
            warn!(
                "Could not open conversation log {}: {}; continuing without it",
                path, e
            );
            Arc::new(NoConversationLogger)
        }
    }
}

//! CLI command definitions

use clap::{Parser, ValueEnum};
use searchlight_domain::{RetrievalMode, SearchBackend};
use std::path::PathBuf;

/// Output format for turn results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The assistant reply as text
    Text,
    /// The whole turn outcome as JSON
    Json,
}

impl From<OutputFormat> for searchlight_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => searchlight_domain::OutputFormat::Text,
            OutputFormat::Json => searchlight_domain::OutputFormat::Json,
        }
    }
}

/// How search results reach the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Provider-rendered digest, no article fetch
    Summary,
    /// Result records plus full text of the top links
    Structured,
}

impl From<ModeArg> for RetrievalMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Summary => RetrievalMode::Summary,
            ModeArg::Structured => RetrievalMode::Structured,
        }
    }
}

/// Search backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchProviderArg {
    /// SerpAPI Google results (needs SERPAPI_API_KEY)
    Serpapi,
    /// DuckDuckGo Instant Answer API (no key)
    Duckduckgo,
}

impl From<SearchProviderArg> for SearchBackend {
    fn from(provider: SearchProviderArg) -> Self {
        match provider {
            SearchProviderArg::Serpapi => SearchBackend::SerpApi,
            SearchProviderArg::Duckduckgo => SearchBackend::DuckDuckGo,
        }
    }
}

/// CLI arguments for searchlight
#[derive(Parser, Debug)]
#[command(name = "searchlight")]
#[command(author, version, about = "A chatbot that searches the web when it needs to")]
#[command(long_about = r#"
Searchlight answers each message in one turn:

1. Router:  the model decides whether the question needs a web search
2. Search:  the search provider is queried with your message
3. Fetch:   the top result pages are read (structured mode only)
4. Chat:    the model replies, grounded in whatever was found

Configuration files are loaded from (in priority order):
1. SEARCHLIGHT_* environment variables
2. --config <path>          Explicit config file
3. ./searchlight.toml       Project-level config
4. ~/.config/searchlight/config.toml   Global config

API keys are read from GROQ_API_KEY and SERPAPI_API_KEY (a .env file is honored).

Example:
  searchlight "What's the weather in Paris today?"
  searchlight --mode summary -o json "Bitcoin price"
  searchlight
"#)]
pub struct Cli {
    /// The question to answer (starts interactive chat when omitted)
    pub question: Option<String>,

    /// Retrieval mode
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Model id sent to the provider
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Sampling temperature (0.0 - 2.0)
    #[arg(long, value_name = "TEMP")]
    pub temperature: Option<f32>,

    /// Number of leading search results to read in full
    #[arg(long, value_name = "N")]
    pub fetch_limit: Option<usize>,

    /// Read result pages concurrently
    #[arg(long)]
    pub parallel_fetch: bool,

    /// Search backend
    #[arg(long, value_enum)]
    pub search_provider: Option<SearchProviderArg>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to a daily rolling file in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

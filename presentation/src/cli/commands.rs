//! CLI command definitions

use boardroom_domain::OutputFormat as DomainOutputFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for boardroom results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Winner banner, winner text, then every proposal and the tally
    Full,
    /// Only the winner banner and text
    Winner,
    /// JSON output
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => DomainOutputFormat::Full,
            OutputFormat::Winner => DomainOutputFormat::Winner,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for boardroom
#[derive(Parser, Debug)]
#[command(name = "boardroom")]
#[command(author, version, about = "Boardroom voting - several LLMs answer, then vote on the best answer")]
#[command(long_about = r#"
Boardroom sends one question to every provider you have a key for, then asks
each of them to vote for the best answer.

The process has two rounds:
1. Answer Round: All active providers answer your question in parallel
2. Vote Round: Each provider sees every numbered proposal and votes for one

The proposal with the most votes wins; ties go to the earlier proposal.
At least two providers need a key.

Keys are read from each provider's api_key_env (e.g. OPENAI_API_KEY) and
can be given explicitly with --key PROVIDER=KEY.

Configuration files are loaded from (in priority order):
1. BOARDROOM_* environment variables
2. --config <path>     Explicit config file
3. ./boardroom.toml    Project-level config
4. ~/.config/boardroom/config.toml   Global config

Example:
  boardroom "What's the best way to handle errors in Rust?"
  boardroom -k openai=sk-... -k groq=gsk_... -o winner "Explain CRDTs briefly"
  boardroom -p openai -p mistral -o json "Name three sorting algorithms"
"#)]
pub struct Cli {
    /// The question to put to the boardroom
    #[arg(required_unless_present_any = ["show_config", "list_providers"])]
    pub question: Option<String>,

    /// Provider credential as PROVIDER=KEY (can be specified multiple times)
    #[arg(short, long = "key", value_name = "PROVIDER=KEY")]
    pub keys: Vec<String>,

    /// Only use these providers (can be specified multiple times)
    #[arg(short, long = "provider", value_name = "ID")]
    pub providers: Vec<String>,

    /// Output format [default: from config, else full]
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Per-provider timeout in seconds for each round
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// List configured providers and whether each has a key, then exit
    #[arg(long)]
    pub list_providers: bool,
}

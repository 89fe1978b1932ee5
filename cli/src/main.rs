//! CLI entrypoint for boardroom
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use boardroom_application::{
    ProgressNotifier, ProviderRegistry, RunEnsembleInput, RunEnsembleUseCase,
};
use boardroom_domain::{OutputFormat, ProviderId, Question};
use boardroom_infrastructure::{
    ConfigLoader, CredentialResolver, DefaultAdapterFactory, FileConfig, HttpTransport,
};
use boardroom_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use clap::Parser;
use std::io::IsTerminal;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Headroom for the transport-level timeout over the per-provider one
const HTTP_TIMEOUT_MARGIN: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; RUST_LOG wins when set
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    info!("Starting boardroom");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    if let Some(secs) = cli.timeout {
        config.ensemble.timeout_seconds = secs;
    }

    check_config(&config)?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // === Credentials ===
    let mut credentials = CredentialResolver::from_env()
        .resolve(&config.providers, &cli.keys)
        .context("Invalid --key argument")?;

    if !cli.providers.is_empty() {
        let selected: Vec<ProviderId> = cli
            .providers
            .iter()
            .map(|p| ProviderId::from(p.trim().to_lowercase()))
            .collect();
        if let Some(unknown) = selected
            .iter()
            .find(|id| !config.providers.iter().any(|s| &s.id == *id))
        {
            bail!("Unknown provider: {}", unknown);
        }
        credentials.retain_providers(&selected);
    }

    if cli.list_providers {
        print!(
            "{}",
            ConsoleFormatter::format_providers(&config.providers, &credentials)
        );
        return Ok(());
    }

    let question = cli
        .question
        .as_deref()
        .context("Question is required")?
        .parse::<Question>()?;

    // === Dependency Injection ===
    let ensemble_config = config.to_ensemble_config();
    let transport = HttpTransport::new(ensemble_config.provider_timeout + HTTP_TIMEOUT_MARGIN)
        .context("Failed to build HTTP client")?;
    let factory = DefaultAdapterFactory::new(transport);
    let registry = Arc::new(ProviderRegistry::build(config.providers.clone(), &factory)?);

    // Print header
    let show_progress = !cli.quiet && format != OutputFormat::Json;
    if show_progress {
        println!();
        println!("+============================================================+");
        println!("|              Boardroom - LLM Ensemble Vote                 |");
        println!("+============================================================+");
        println!();
        println!("Question: {}", question);
        println!(
            "Providers: {}",
            registry
                .ids()
                .filter(|id| credentials.is_active(id))
                .map(|id| id.display_name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!();
    }

    let use_case = RunEnsembleUseCase::new(registry, ensemble_config);
    let input = RunEnsembleInput::new(question, credentials);

    // Execute with or without progress reporting
    let result = if show_progress {
        // Bars only on a terminal; plain lines when stderr is piped
        let progress: Box<dyn ProgressNotifier> = if std::io::stderr().is_terminal() {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(SimpleProgress::stderr())
        };
        use_case
            .execute_with_progress(input, progress.as_ref())
            .await?
    } else {
        use_case.execute(input).await?
    };

    println!("{}", ConsoleFormatter::render(&result, format));

    Ok(())
}

/// Log every config issue and refuse to run on any of them
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    if issues.is_empty() {
        return Ok(());
    }
    for issue in &issues {
        warn!("Config: {}", issue);
    }
    bail!(
        "Invalid configuration: {}",
        issues
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    )
}

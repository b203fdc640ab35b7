//! Portfolio server
//!
//! Serves the portfolio API from a freshly seeded in-memory store.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use portfolio::{http, MemStorage, ServerConfig, Storage};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "portfolio-server", version, about = "Serve the portfolio API")]
struct Cli {
    /// YAML config file; defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on (overrides the config file)
    #[arg(short, long, env = "PORTFOLIO_BIND")]
    bind: Option<String>,

    /// Log filter used when RUST_LOG is unset (overrides the config file)
    #[arg(long)]
    log_level: Option<String>,
}

fn load_config(cli: &Cli) -> Result<ServerConfig> {
    let mut config = match &cli.config {
        Some(path) => ServerConfig::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ServerConfig::default(),
    };

    if let Some(bind) = &cli.bind {
        config.bind_address = bind.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }

    config.validate()?;
    Ok(config)
}

async fn run(config: ServerConfig) -> Result<()> {
    let store = Arc::new(MemStorage::new());
    tracing::info!(
        projects = store.get_projects()?.len(),
        skills = store.get_skills()?.len(),
        "store seeded"
    );

    http::serve(store, config.profile, &config.bind_address)
        .await
        .with_context(|| format!("serving on {}", config.bind_address))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_target(false)
        .init();

    tracing::info!("Starting portfolio server v{}", env!("CARGO_PKG_VERSION"));

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(config))
}

//! classplan - Student Schedule Planner
//!
//! CLI entry point for the interactive planning shell.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use eyre::{Context, Result};
use tracing::{debug, info};

use classplan::api::HttpPlannerApi;
use classplan::cli::Cli;
use classplan::config::Config;
use classplan::repl::PlannerRepl;
use classplan::session::SessionController;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Log to a file so the interactive shell stays clean
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("classplan")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let level_str = cli_log_level.or(config_log_level);
    let level = match level_str.map(str::to_uppercase).as_deref() {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("INFO") | None => tracing::Level::INFO,
        Some("WARN") | Some("WARNING") => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", other);
            tracing::Level::INFO
        }
    };

    let log_file = fs::File::create(log_dir.join("classplan.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }

    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref()).context("Failed to setup logging")?;

    info!("classplan loaded config: base_url={}", config.api.base_url);

    let catalog = config.catalog().context("Invalid course catalog")?;
    if catalog.is_empty() {
        eyre::bail!("Course catalog is empty; configure at least one course");
    }

    let api = Arc::new(HttpPlannerApi::from_config(&config.api).context("Failed to create planner API client")?);
    let controller = SessionController::new(catalog, api);

    debug!("main: starting REPL");
    PlannerRepl::new(controller).run().await
}

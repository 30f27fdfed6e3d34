//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

/// classplan - interactive student schedule planner
#[derive(Debug, Parser)]
#[command(name = "cplan", about = "Interactive session controller for planning a class schedule", version)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)")]
    pub log_level: Option<String>,

    /// Override the planner backend base URL
    #[arg(long = "base-url", help = "Planner backend base URL")]
    pub base_url: Option<String>,
}

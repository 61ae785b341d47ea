//! Background removal server entry point
//!
//! Parses the command line, initializes tracing and serves `/remove-bg`
//! until interrupted.

use super::config::CliConfigBuilder;
use crate::{
    api::start_server,
    remover,
    tracing_config::{init_server_tracing, TracingFormat},
};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

/// HTTP server removing image backgrounds through an external tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "bgremove-server")]
pub struct Cli {
    /// Interface to bind
    #[arg(long, env = "BGREMOVE_HOST", default_value = crate::config::DEFAULT_HOST)]
    pub host: String,

    /// Port to bind
    #[arg(short, long, env = "BGREMOVE_PORT", default_value_t = crate::config::DEFAULT_PORT)]
    pub port: u16,

    /// Background-removal program invoked for every upload
    #[arg(long, env = "BGREMOVE_REMOVER", default_value = "rembg")]
    pub remover: String,

    /// Argument passed to the remover; {input} and {output} are replaced by file paths
    /// [default: i {input} {output}]
    #[arg(long = "remover-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub remover_args: Vec<String>,

    /// Enable verbose logging (-v: DEBUG, -vv: TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable debug mode (debug-level logging is on by default)
    #[arg(long, env = "BGREMOVE_NO_DEBUG")]
    pub no_debug: bool,

    /// Emit logs as JSON lines
    #[cfg(feature = "tracing-json")]
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    fn tracing_format(&self) -> TracingFormat {
        #[cfg(feature = "tracing-json")]
        if self.json_logs {
            return TracingFormat::Json;
        }
        TracingFormat::Console
    }
}

pub async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfigBuilder::from_cli(&cli).context("Invalid configuration")?;

    init_server_tracing(cli.verbose, config.debug, cli.tracing_format())
        .context("Failed to initialize tracing")?;

    info!(
        host = %config.host,
        port = config.port,
        remover = %config.remover.program,
        debug = config.debug,
        "Starting background removal server"
    );

    let remover = remover::from_config(&config.remover).context("Failed to create remover")?;

    start_server(config, remover)
        .await
        .context("Server terminated with an error")
}

//! Configuration conversion utilities for CLI arguments

use crate::cli::main_impl::Cli;
use crate::config::{RemoverConfig, ServerConfig};
use anyhow::{Context, Result};

/// Convert CLI arguments to `ServerConfig`
pub(crate) struct CliConfigBuilder;

impl CliConfigBuilder {
    /// Build a validated `ServerConfig` from CLI arguments
    pub(crate) fn from_cli(cli: &Cli) -> Result<ServerConfig> {
        let remover = if cli.remover_args.is_empty() {
            RemoverConfig {
                program: cli.remover.clone(),
                ..RemoverConfig::default()
            }
        } else {
            RemoverConfig::new(cli.remover.clone(), cli.remover_args.clone())
        };

        ServerConfig::builder()
            .host(cli.host.clone())
            .port(cli.port)
            .debug(!cli.no_debug)
            .remover(remover)
            .build()
            .context("Invalid server configuration")
    }
}

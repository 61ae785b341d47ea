//! External command backend
//!
//! Each call gets its own temporary directory: the upload is written to
//! `input`, the program is asked to write `output.png`, and the directory is
//! removed when the call returns.

use crate::{
    config::{RemoverConfig, INPUT_PLACEHOLDER, OUTPUT_PLACEHOLDER},
    error::{Result, ServiceError},
    remover::BackgroundRemover,
    services::format,
};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;
use tracing::{debug, instrument};

/// Remover backed by an external program
#[derive(Debug, Clone)]
pub struct CommandRemover {
    config: RemoverConfig,
}

impl CommandRemover {
    /// Create a command remover
    ///
    /// # Errors
    /// - Invalid remover configuration
    pub fn new(config: RemoverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Program configuration
    #[must_use]
    pub fn config(&self) -> &RemoverConfig {
        &self.config
    }

    /// Substitute the temporary paths into the configured arguments
    fn render_args(&self, input: &Path, output: &Path) -> Vec<String> {
        let input = input.to_string_lossy();
        let output = output.to_string_lossy();

        self.config
            .args
            .iter()
            .map(|arg| {
                arg.replace(INPUT_PLACEHOLDER, &input)
                    .replace(OUTPUT_PLACEHOLDER, &output)
            })
            .collect()
    }
}

impl BackgroundRemover for CommandRemover {
    fn name(&self) -> &str {
        &self.config.program
    }

    #[instrument(skip_all, fields(program = %self.config.program, input_bytes = image.len()))]
    fn remove_background(&self, image: &[u8]) -> Result<Vec<u8>> {
        let workdir = tempfile::Builder::new().prefix("bgremove-").tempdir()?;
        let input_path = workdir.path().join("input");
        let output_path = workdir.path().join("output.png");

        std::fs::write(&input_path, image)
            .map_err(|e| ServiceError::file_io_error("write input", &input_path, &e))?;

        let args = self.render_args(&input_path, &output_path);
        debug!(args = ?args, "Running remover");

        let started = Instant::now();
        let output = Command::new(&self.config.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                ServiceError::processing(format!(
                    "failed to start '{}': {}",
                    self.config.program, e
                ))
            })?;

        if !output.status.success() {
            return Err(ServiceError::command_failed(
                &self.config.program,
                &output.status.to_string(),
                &String::from_utf8_lossy(&output.stderr),
            ));
        }

        let bytes = std::fs::read(&output_path)
            .map_err(|e| ServiceError::file_io_error("read remover output", &output_path, &e))?;

        debug!(
            output_bytes = bytes.len(),
            duration_ms = started.elapsed().as_millis(),
            "Remover finished"
        );

        format::ensure_png(bytes)
    }
}

//! Error types for the background removal service

use thiserror::Error;

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Errors raised below the HTTP boundary
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Input/output errors (temporary files, socket binding, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decoding or encoding errors
    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    /// The external remover failed or produced unusable output
    #[error("Processing error: {0}")]
    Processing(String),

    /// Invalid configuration or parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generic error for unexpected conditions
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a new processing error
    pub fn processing<S: Into<String>>(msg: S) -> Self {
        Self::Processing(msg.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }

    /// Create file I/O error with operation context
    pub fn file_io_error<P: AsRef<std::path::Path>>(
        operation: &str,
        path: P,
        error: &std::io::Error,
    ) -> Self {
        let path_display = path.as_ref().display();
        Self::Io(std::io::Error::new(
            error.kind(),
            format!("Failed to {} '{}': {}", operation, path_display, error),
        ))
    }

    /// Create a processing error for a failed external command
    pub fn command_failed(program: &str, status: &str, stderr: &str) -> Self {
        let stderr = stderr.trim();
        let detail = if stderr.is_empty() {
            String::new()
        } else {
            format!(": {}", stderr)
        };

        Self::Processing(format!("'{}' exited with {}{}", program, status, detail))
    }

    /// Create configuration error naming the offending parameter
    pub fn config_value_error<T: std::fmt::Display>(
        parameter: &str,
        value: T,
        expected: &str,
    ) -> Self {
        Self::InvalidConfig(format!(
            "Invalid {}: '{}' (expected {})",
            parameter, value, expected
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_error_creation() {
        let err = ServiceError::invalid_config("test config error");
        assert!(matches!(err, ServiceError::InvalidConfig(_)));

        let err = ServiceError::processing("cannot identify image file");
        assert!(matches!(err, ServiceError::Processing(_)));
    }

    #[test]
    fn test_error_display() {
        let err = ServiceError::invalid_config("port must not be 0");
        assert_eq!(err.to_string(), "Invalid configuration: port must not be 0");
    }

    #[test]
    fn test_file_io_error_context() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = ServiceError::file_io_error("read output", Path::new("/tmp/out.png"), &io_error);
        let message = err.to_string();
        assert!(message.contains("read output"));
        assert!(message.contains("/tmp/out.png"));
        assert!(message.contains("no such file"));
    }

    #[test]
    fn test_command_failed_message() {
        let err = ServiceError::command_failed("rembg", "exit status: 1", "  boom\n");
        assert_eq!(
            err.to_string(),
            "Processing error: 'rembg' exited with exit status: 1: boom"
        );

        let err = ServiceError::command_failed("rembg", "exit status: 2", "");
        assert_eq!(
            err.to_string(),
            "Processing error: 'rembg' exited with exit status: 2"
        );
    }

    #[test]
    fn test_config_value_error() {
        let err = ServiceError::config_value_error("port", 0, "1-65535");
        let message = err.to_string();
        assert!(message.contains("port"));
        assert!(message.contains("'0'"));
        assert!(message.contains("1-65535"));
    }
}

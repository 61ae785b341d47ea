//! Configuration types for the background removal server

use crate::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};
use std::net::{SocketAddr, ToSocketAddrs};

/// Placeholder replaced by the path of the uploaded image
pub const INPUT_PLACEHOLDER: &str = "{input}";

/// Placeholder replaced by the path the remover must write its PNG to
pub const OUTPUT_PLACEHOLDER: &str = "{output}";

/// Default bind address (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port, the one the web frontend calls
pub const DEFAULT_PORT: u16 = 5001;

/// External program invoked for every upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoverConfig {
    /// Program name or path
    pub program: String,

    /// Arguments, with `{input}` and `{output}` placeholders
    pub args: Vec<String>,
}

impl Default for RemoverConfig {
    fn default() -> Self {
        Self {
            program: "rembg".to_string(),
            args: vec![
                "i".to_string(),
                INPUT_PLACEHOLDER.to_string(),
                OUTPUT_PLACEHOLDER.to_string(),
            ],
        }
    }
}

impl RemoverConfig {
    /// Create a remover configuration from a program and its arguments
    pub fn new<S: Into<String>>(program: S, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Validate the program and the placeholder arguments
    ///
    /// # Errors
    /// - Empty program name
    /// - No argument carries the `{input}` placeholder
    /// - No argument carries the `{output}` placeholder
    pub fn validate(&self) -> Result<()> {
        if self.program.trim().is_empty() {
            return Err(ServiceError::invalid_config(
                "remover program must not be empty",
            ));
        }

        for placeholder in [INPUT_PLACEHOLDER, OUTPUT_PLACEHOLDER] {
            if !self.args.iter().any(|arg| arg.contains(placeholder)) {
                return Err(ServiceError::config_value_error(
                    "remover arguments",
                    self.args.join(" "),
                    &format!("an argument containing {}", placeholder),
                ));
            }
        }

        Ok(())
    }
}

/// Configuration of the HTTP server process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// TCP port to bind
    pub port: u16,

    /// Verbose logging (the server's debug mode)
    pub debug: bool,

    /// External background-removal program
    pub remover: RemoverConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            debug: true,
            remover: RemoverConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Create a new configuration builder
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bgremove_server::ServerConfig;
    ///
    /// let config = ServerConfig::builder()
    ///     .host("127.0.0.1")
    ///     .port(8080)
    ///     .debug(false)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(config.port, 8080);
    /// ```
    #[must_use]
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Validate all configuration parameters
    ///
    /// # Errors
    /// - Empty host
    /// - Port 0
    /// - Invalid remover configuration
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(ServiceError::invalid_config("host must not be empty"));
        }

        if self.port == 0 {
            return Err(ServiceError::config_value_error("port", self.port, "1-65535"));
        }

        self.remover.validate()
    }

    /// Resolve `host:port` to the address the listener binds
    ///
    /// # Errors
    /// - The host cannot be resolved
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| {
                ServiceError::invalid_config(format!(
                    "cannot resolve '{}:{}': {}",
                    self.host, self.port, e
                ))
            })?
            .next()
            .ok_or_else(|| {
                ServiceError::invalid_config(format!(
                    "'{}:{}' resolved to no address",
                    self.host, self.port
                ))
            })
    }
}

/// Builder for `ServerConfig`
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    config: ServerConfig,
}

impl ServerConfigBuilder {
    /// Set the bind host
    #[must_use]
    pub fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the bind port
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Enable debug mode
    #[must_use]
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Set the external remover
    #[must_use]
    pub fn remover(mut self, remover: RemoverConfig) -> Self {
        self.config.remover = remover;
        self
    }

    /// Build and validate the configuration
    ///
    /// # Errors
    /// - Any rule checked by [`ServerConfig::validate`]
    pub fn build(self) -> Result<ServerConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

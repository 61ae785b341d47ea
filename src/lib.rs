#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::unused_async)]

//! # Background Removal Server
//!
//! A single HTTP endpoint that accepts an uploaded image and answers with a
//! background-removed PNG. Segmentation is delegated to an external tool
//! (the `rembg` CLI by default) behind the [`BackgroundRemover`] trait.
//!
//! ## HTTP API
//!
//! | Method | Path | Success | Failure |
//! |---|---|---|---|
//! | POST | `/remove-bg` | 200, `image/png` | 400 missing `image` field, 500 processing error |
//! | GET | `/health` | 200, JSON status | |
//!
//! Every origin is allowed by CORS.
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use bgremove_server::{remover, start_server, ServerConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServerConfig::builder()
//!     .host("127.0.0.1")
//!     .port(5001)
//!     .build()?;
//! let remover = remover::from_config(&config.remover)?;
//! start_server(config, remover).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom Removers
//!
//! Anything implementing [`BackgroundRemover`] can be served, which is how
//! the tests drive the endpoint without an external program:
//!
//! ```rust
//! use bgremove_server::{BackgroundRemover, Result};
//!
//! struct Passthrough;
//!
//! impl BackgroundRemover for Passthrough {
//!     fn name(&self) -> &str {
//!         "passthrough"
//!     }
//!
//!     fn remove_background(&self, image: &[u8]) -> Result<Vec<u8>> {
//!         bgremove_server::services::ensure_png(image.to_vec())
//!     }
//! }
//! ```

pub mod api;
pub mod backends;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod remover;
pub mod services;
#[cfg(feature = "cli")]
pub mod tracing_config;

// Public API exports
pub use api::{create_app, start_server, ApiError, AppState};
pub use backends::CommandRemover;
pub use config::{RemoverConfig, ServerConfig, ServerConfigBuilder};
pub use error::{Result, ServiceError};
pub use remover::BackgroundRemover;

#[cfg(feature = "cli")]
pub use tracing_config::{init_server_tracing, TracingConfig, TracingFormat};

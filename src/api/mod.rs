//! HTTP surface: the `/remove-bg` endpoint and its router

pub mod errors;
pub mod handlers;
pub mod server;

pub use errors::{ApiError, ErrorResponse, MISSING_IMAGE_MESSAGE, PROCESSING_FAILURE_MESSAGE};
pub use handlers::{HealthResponse, IMAGE_FIELD, REQUEST_ID_HEADER};
pub use server::{create_app, start_server, AppState};

//! Errors surfaced at the HTTP boundary
//!
//! Only two outcomes reach the caller: the upload had no image, or the
//! remover failed. The remover's own message is kept for the server log and
//! never serialized.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Message returned when the request carries no `image` part
pub const MISSING_IMAGE_MESSAGE: &str = "Aucune image reçue";

/// Message returned when background removal fails
pub const PROCESSING_FAILURE_MESSAGE: &str = "Erreur lors du traitement de l’image";

/// JSON error body: `{"error": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No multipart part named `image`
    MissingField,
    /// The remover raised an error; `detail` is for logs only
    ProcessingFailure { detail: String },
}

impl ApiError {
    pub fn processing<S: Into<String>>(detail: S) -> Self {
        Self::ProcessingFailure {
            detail: detail.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingField => StatusCode::BAD_REQUEST,
            Self::ProcessingFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Public message, identical for every error of the same kind
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MissingField => MISSING_IMAGE_MESSAGE,
            Self::ProcessingFailure { .. } => PROCESSING_FAILURE_MESSAGE,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.public_message().to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField => write!(f, "missing multipart field 'image'"),
            Self::ProcessingFailure { detail } => write!(f, "processing failure: {}", detail),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<crate::error::ServiceError> for ApiError {
    fn from(err: crate::error::ServiceError) -> Self {
        Self::processing(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_response())).into_response()
    }
}

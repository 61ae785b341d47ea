use axum::{
    body::Bytes,
    extract::{multipart::MultipartRejection, Multipart, State},
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info_span, Instrument};
use uuid::Uuid;

use super::{errors::ApiError, server::AppState};
use crate::services::format::PNG_MIME;

/// Multipart field carrying the uploaded image
pub const IMAGE_FIELD: &str = "image";

/// Response header echoing the id used in server logs
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const INLINE_DISPOSITION: &str = "inline; filename=\"output.png\"";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub remover: String,
}

/// `POST /remove-bg`
pub async fn remove_background_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let span = info_span!("remove_bg", request_id = %request_id);

    let mut response = match process_upload(&state, multipart).instrument(span).await {
        Ok(png) => png_response(png),
        Err(err) => err.into_response(),
    };

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }
    response
}

/// `GET /health`
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        remover: state.remover.name().to_string(),
    })
}

async fn process_upload(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Vec<u8>, ApiError> {
    let image = match multipart {
        Ok(mut multipart) => read_image_field(&mut multipart).await,
        Err(rejection) => {
            debug!(reason = %rejection, "Request is not a multipart upload");
            None
        }
    };
    let image = image.ok_or(ApiError::MissingField)?;

    debug!(input_bytes = image.len(), "Received image");

    let remover = Arc::clone(&state.remover);
    let started = Instant::now();
    let outcome = tokio::task::spawn_blocking(move || remover.remove_background(&image)).await;

    let result = match outcome {
        Ok(Ok(png)) => Ok(png),
        Ok(Err(err)) => Err(ApiError::from(err)),
        Err(join_error) => Err(ApiError::processing(format!(
            "remover task aborted: {}",
            join_error
        ))),
    };

    match &result {
        Ok(png) => debug!(
            output_bytes = png.len(),
            duration_ms = started.elapsed().as_millis(),
            "Background removed"
        ),
        Err(err) => error!(
            remover = %state.remover.name(),
            error = %err,
            "Background removal failed"
        ),
    }

    result
}

/// Read the first file part named `image`, skipping any other parts
///
/// A part without a file name is a plain form value, not an upload.
async fn read_image_field(multipart: &mut Multipart) -> Option<Bytes> {
    loop {
        match multipart.next_field().await {
            Ok(Some(field))
                if field.name() == Some(IMAGE_FIELD) && field.file_name().is_some() =>
            {
                return match field.bytes().await {
                    Ok(bytes) => Some(bytes),
                    Err(err) => {
                        debug!(error = %err, "Failed to read image field");
                        None
                    }
                };
            }
            Ok(Some(field)) => {
                debug!(field = ?field.name(), "Ignoring multipart field");
            }
            Ok(None) => return None,
            Err(err) => {
                debug!(error = %err, "Malformed multipart body");
                return None;
            }
        }
    }
}

fn png_response(png: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, PNG_MIME),
            (header::CONTENT_DISPOSITION, INLINE_DISPOSITION),
        ],
        png,
    )
        .into_response()
}

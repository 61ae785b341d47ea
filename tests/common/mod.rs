//! Shared helpers for the integration tests

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use bgremove_server::{
    create_app, services, AppState, BackgroundRemover, Result, ServerConfig, ServiceError,
};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const BOUNDARY: &str = "bgremove-test-boundary-7MA4YWxkTrZu0gW";

/// How a `ScriptedRemover` answers
#[derive(Debug, Clone)]
pub enum Script {
    /// Return the input, normalized to PNG
    Echo,
    /// Always fail with this message
    Fail(String),
    /// Ignore the input and return these bytes
    Constant(Vec<u8>),
}

/// Remover with a fixed behavior that counts its calls
#[derive(Debug)]
pub struct ScriptedRemover {
    script: Script,
    calls: AtomicUsize,
    last_input_len: AtomicUsize,
}

impl ScriptedRemover {
    fn with_script(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: AtomicUsize::new(0),
            last_input_len: AtomicUsize::new(0),
        })
    }

    pub fn echo() -> Arc<Self> {
        Self::with_script(Script::Echo)
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Self::with_script(Script::Fail(message.to_string()))
    }

    pub fn constant(output: Vec<u8>) -> Arc<Self> {
        Self::with_script(Script::Constant(output))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Size of the most recent input
    pub fn last_input_len(&self) -> usize {
        self.last_input_len.load(Ordering::SeqCst)
    }
}

impl BackgroundRemover for ScriptedRemover {
    fn name(&self) -> &str {
        "scripted"
    }

    fn remove_background(&self, image: &[u8]) -> Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.last_input_len.store(image.len(), Ordering::SeqCst);
        match &self.script {
            Script::Echo => services::ensure_png(image.to_vec()),
            Script::Fail(message) => Err(ServiceError::processing(message.clone())),
            Script::Constant(output) => Ok(output.clone()),
        }
    }
}

pub fn app_with(remover: Arc<dyn BackgroundRemover>) -> Router {
    create_app(AppState::new(ServerConfig::default(), remover))
}

/// A `width` x `height` RGBA PNG
pub fn png_fixture(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    });
    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(image)
        .write_to(&mut buffer, ImageFormat::Png)
        .expect("encode PNG fixture");
    buffer.into_inner()
}

/// A `width` x `height` RGB JPEG
pub fn jpeg_fixture(width: u32, height: u32) -> Vec<u8> {
    let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        width,
        height,
        Rgba([30, 60, 90, 255]),
    ))
    .to_rgb8();
    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(image)
        .write_to(&mut buffer, ImageFormat::Jpeg)
        .expect("encode JPEG fixture");
    buffer.into_inner()
}

/// One part of a multipart body: field name, optional file name, data
pub struct Part<'a> {
    pub name: &'a str,
    pub filename: Option<&'a str>,
    pub data: &'a [u8],
}

impl<'a> Part<'a> {
    pub fn file(name: &'a str, data: &'a [u8]) -> Self {
        Self {
            name,
            filename: Some("upload.png"),
            data,
        }
    }

    pub fn text(name: &'a str, data: &'a [u8]) -> Self {
        Self {
            name,
            filename: None,
            data,
        }
    }
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part.filename {
            Some(filename) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                     Content-Type: application/octet-stream\r\n\r\n",
                    part.name, filename
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", part.name)
                    .as_bytes(),
            ),
        }
        body.extend_from_slice(part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn upload_request(parts: &[Part<'_>]) -> Request<Body> {
    Request::post("/remove-bg")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(parts)))
        .expect("build upload request")
}

pub async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("collect body")
        .to_vec()
}

//! Test utilities and mock removers
//!
//! `MockRemover` implements `BackgroundRemover` without any external
//! program, so the HTTP layer can be tested in isolation.

use crate::{
    error::{Result, ServiceError},
    remover::BackgroundRemover,
    services::format::encode_png,
};
use image::{DynamicImage, Rgba, RgbaImage};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock remover for testing
#[derive(Debug)]
pub struct MockRemover {
    /// Error message to fail with, if any
    failure: Option<String>,
    /// Number of `remove_background` calls
    calls: AtomicUsize,
}

impl MockRemover {
    /// Create a mock remover that returns a transparent 2x2 PNG
    #[must_use]
    pub fn new() -> Self {
        Self {
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock remover that always fails with `message`
    #[must_use]
    pub fn failing<S: Into<String>>(message: S) -> Self {
        Self {
            failure: Some(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of calls received so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockRemover {
    fn default() -> Self {
        Self::new()
    }
}

impl BackgroundRemover for MockRemover {
    fn name(&self) -> &str {
        "mock"
    }

    fn remove_background(&self, _image: &[u8]) -> Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.failure {
            return Err(ServiceError::processing(message.clone()));
        }

        let image = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 0]));
        encode_png(&DynamicImage::ImageRgba8(image))
    }
}

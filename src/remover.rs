//! Background remover abstraction
//!
//! The segmentation itself happens outside this crate. A `BackgroundRemover`
//! is the seam the HTTP layer talks to: raw upload bytes go in, PNG bytes
//! come out.

use crate::{config::RemoverConfig, error::Result};
use std::sync::Arc;

/// Trait for background removal collaborators
pub trait BackgroundRemover: Send + Sync {
    /// Short name used in logs and the health report
    fn name(&self) -> &str;

    /// Remove the background from an encoded image
    ///
    /// Blocks the calling thread until the collaborator finishes. The
    /// returned bytes are PNG data.
    ///
    /// # Errors
    /// - The collaborator cannot decode the input
    /// - The collaborator fails or produces unusable output
    fn remove_background(&self, image: &[u8]) -> Result<Vec<u8>>;
}

/// Build the production remover from its configuration
///
/// # Errors
/// - Invalid remover configuration
pub fn from_config(config: &RemoverConfig) -> Result<Arc<dyn BackgroundRemover>> {
    let remover = crate::backends::CommandRemover::new(config.clone())?;
    Ok(Arc::new(remover))
}

//! Remover implementations
//!
//! - Command backend: runs an external background-removal program on
//!   temporary files (the `rembg` CLI by default)

pub mod command;

// Test utilities for remover testing
#[cfg(test)]
pub mod test_utils;

pub use self::command::CommandRemover;

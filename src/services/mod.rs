//! Services shared by the remover adapters and the HTTP layer

pub mod format;

pub use format::{encode_png, ensure_png, is_png, PNG_MIME, PNG_SIGNATURE};

//! `qrbill-core`: shared building blocks for Swiss QR-bill generation.
//!
//! This crate contains **pure** primitives (no IO, no rendering concerns).

pub mod error;
pub mod text;
pub mod value_object;

pub use error::{QrBillError, QrBillResult};
pub use text::{FieldLimit, truncate_chars};
pub use value_object::ValueObject;

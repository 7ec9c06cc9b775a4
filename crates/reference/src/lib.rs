//! Creditor reference generation (QR reference and ISO 11649 creditor reference).
//!
//! Every function here is pure and total: any input yields a well-formed
//! reference, and the generated references always verify.

pub mod qrr;
pub mod reference;
pub mod scor;

pub use qrr::{generate_qr_reference, verify_qr_reference};
pub use reference::{PaymentReference, ReferenceKind};
pub use scor::{generate_scor_reference, verify_scor_reference};

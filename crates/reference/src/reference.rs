use serde::{Deserialize, Serialize};

use qrbill_core::{FieldLimit, QrBillError, QrBillResult, ValueObject};

use crate::{generate_qr_reference, generate_scor_reference, verify_qr_reference, verify_scor_reference};

/// Reference type as written into the payment payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReferenceKind {
    /// 27-digit QR reference (requires a QR-IBAN).
    Qrr,
    /// ISO 11649 creditor reference.
    Scor,
    /// No reference.
    Non,
}

impl ReferenceKind {
    /// Payload code (`QRR`, `SCOR`, `NON`).
    pub const fn code(self) -> &'static str {
        match self {
            ReferenceKind::Qrr => "QRR",
            ReferenceKind::Scor => "SCOR",
            ReferenceKind::Non => "NON",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "QRR" => Some(ReferenceKind::Qrr),
            "SCOR" => Some(ReferenceKind::Scor),
            "NON" => Some(ReferenceKind::Non),
            _ => None,
        }
    }
}

impl core::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

/// A validated payment reference.
///
/// Invariants:
/// - `Qrr`: exactly 27 digits, last digit is the mod10 check digit.
/// - `Scor`: `RF` + check digits + alphanumeric body, at most 25 characters, mod97 valid.
/// - `Non`: empty value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PaymentReference {
    kind: ReferenceKind,
    value: String,
}

impl ValueObject for PaymentReference {}

impl PaymentReference {
    /// Validate an existing reference value.
    pub fn new(kind: ReferenceKind, value: impl Into<String>) -> QrBillResult<Self> {
        let value: String = value.into();
        match kind {
            ReferenceKind::Qrr if !verify_qr_reference(&value) => {
                return Err(QrBillError::encoding(format!(
                    "invalid QR reference '{value}': expected 27 digits with a valid check digit"
                )));
            }
            ReferenceKind::Scor if !FieldLimit::ScorReference.fits(&value) => {
                return Err(QrBillError::encoding(format!(
                    "creditor reference '{value}' exceeds {} characters",
                    FieldLimit::ScorReference.max_chars()
                )));
            }
            ReferenceKind::Scor if !verify_scor_reference(&value) => {
                return Err(QrBillError::encoding(format!(
                    "invalid creditor reference '{value}'"
                )));
            }
            ReferenceKind::Non if !value.is_empty() => {
                return Err(QrBillError::encoding("reference type NON must not carry a value"));
            }
            _ => {}
        }
        Ok(Self { kind, value })
    }

    /// QR reference derived from the digits of `raw_input`.
    pub fn qr_from(raw_input: &str) -> Self {
        Self {
            kind: ReferenceKind::Qrr,
            value: generate_qr_reference(raw_input),
        }
    }

    /// Creditor reference derived from `raw_input`.
    ///
    /// Fails when the result would exceed the 25-character ISO 11649 limit.
    pub fn scor_from(raw_input: &str) -> QrBillResult<Self> {
        Self::new(ReferenceKind::Scor, generate_scor_reference(raw_input))
    }

    pub fn none() -> Self {
        Self {
            kind: ReferenceKind::Non,
            value: String::new(),
        }
    }

    pub fn kind(&self) -> ReferenceKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_none(&self) -> bool {
        self.kind == ReferenceKind::Non
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_codes_round_trip() {
        for kind in [ReferenceKind::Qrr, ReferenceKind::Scor, ReferenceKind::Non] {
            assert_eq!(ReferenceKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ReferenceKind::from_code("QR"), None);
    }

    #[test]
    fn derived_references_carry_their_kind() {
        let qrr = PaymentReference::qr_from("INV-0001");
        assert_eq!(qrr.kind(), ReferenceKind::Qrr);
        assert_eq!(qrr.value(), "000000000000000000000000011");

        let scor = PaymentReference::scor_from("INV0001").unwrap();
        assert_eq!(scor.kind(), ReferenceKind::Scor);
        assert_eq!(scor.value(), "RF40INV0001");

        assert!(PaymentReference::none().is_none());
        assert_eq!(PaymentReference::none().value(), "");
    }

    #[test]
    fn over_length_creditor_reference_is_an_encoding_error() {
        let err = PaymentReference::scor_from("ABCDEFGHIJKLMNOPQRSTUVW").unwrap_err();
        match err {
            QrBillError::Encoding(msg) if msg.contains("exceeds 25 characters") => {}
            _ => panic!("Expected Encoding error for over-length creditor reference"),
        }
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(PaymentReference::new(ReferenceKind::Qrr, "210000000003139471430009018").is_err());
        assert!(PaymentReference::new(ReferenceKind::Scor, "RF19539007547034").is_err());
        assert!(PaymentReference::new(ReferenceKind::Non, "x").is_err());
        assert!(PaymentReference::new(ReferenceKind::Qrr, "210000000003139471430009017").is_ok());
    }
}

use serde::Serialize;
use tracing::warn;

use qrbill_core::{QrBillResult, ValueObject};
use qrbill_reference::PaymentReference;

use crate::format::{alnum_of, digits_of};
use crate::iban::{is_qr_iban, normalize_iban};
use crate::input::{BillingPolicy, CompanySettings, Invoice, ReferenceType};
use crate::party::PartyAddress;
use crate::spc::{SPC_LINE_SEPARATOR, build_spc, validate_creditor};

/// Structured content of a payment slip, before encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillParts {
    /// ISO 4217 code (`CHF` or `EUR`).
    pub currency: String,
    /// Amount in smallest currency unit.
    pub amount: u64,
    pub creditor: PartyAddress,
    pub debtor: PartyAddress,
    pub reference: PaymentReference,
    pub unstructured_message: String,
    pub billing_information: String,
    pub alternative_schemes: Vec<String>,
}

/// A validated bill together with its encoded SPC text.
///
/// The encoded text is derived once from the parts at construction and can
/// never drift from them: there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillPayload {
    parts: BillParts,
    encoded_text: String,
}

impl ValueObject for BillPayload {}

impl BillPayload {
    /// Validate and encode.
    pub fn new(parts: BillParts) -> QrBillResult<Self> {
        let encoded_text = build_spc(&parts)?.join(SPC_LINE_SEPARATOR);
        Ok(Self { parts, encoded_text })
    }

    /// Build a bill from an invoice and the issuing company's settings.
    ///
    /// The reference is derived from the invoice id according to
    /// `settings.qr_reference_type`; see [`ReferenceType`].
    pub fn from_invoice(
        invoice: &Invoice,
        settings: &CompanySettings,
        policy: &BillingPolicy,
    ) -> QrBillResult<Self> {
        let account = select_account(settings);
        let creditor = PartyAddress::normalize(
            &settings.creditor_input(),
            account.as_deref(),
            &policy.default_country,
        )?;
        validate_creditor(&creditor)?;

        let debtor = PartyAddress::normalize(&invoice.client, None, &policy.default_country)?;

        let reference = match settings.qr_reference_type {
            ReferenceType::Qr => {
                if !creditor.account().is_some_and(is_qr_iban) {
                    warn!(invoice_id = %invoice.id, "QR reference paired with an account that is not a QR-IBAN");
                }
                PaymentReference::qr_from(&digits_of(&invoice.id))
            }
            ReferenceType::Scor => PaymentReference::scor_from(&alnum_of(&invoice.id))?,
            ReferenceType::Non => PaymentReference::none(),
        };

        let mut unstructured_message = trimmed(invoice.message.as_deref());
        if unstructured_message.is_empty() && reference.is_none() {
            unstructured_message = format!("Invoice {}", invoice.id);
        }

        Self::new(BillParts {
            currency: invoice.currency.trim().to_ascii_uppercase(),
            amount: invoice.amount,
            creditor,
            debtor,
            reference,
            unstructured_message,
            billing_information: trimmed(invoice.billing_information.as_deref()),
            alternative_schemes: invoice
                .alternative_schemes
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        })
    }

    pub fn parts(&self) -> &BillParts {
        &self.parts
    }

    pub fn currency(&self) -> &str {
        &self.parts.currency
    }

    pub fn amount(&self) -> u64 {
        self.parts.amount
    }

    pub fn creditor(&self) -> &PartyAddress {
        &self.parts.creditor
    }

    pub fn debtor(&self) -> &PartyAddress {
        &self.parts.debtor
    }

    pub fn reference(&self) -> &PaymentReference {
        &self.parts.reference
    }

    pub fn unstructured_message(&self) -> &str {
        &self.parts.unstructured_message
    }

    pub fn billing_information(&self) -> &str {
        &self.parts.billing_information
    }

    pub fn alternative_schemes(&self) -> &[String] {
        &self.parts.alternative_schemes
    }

    /// SPC text, lines joined with CRLF.
    pub fn encoded_text(&self) -> &str {
        &self.encoded_text
    }
}

/// QR references route through a QR-IBAN, everything else through a plain IBAN;
/// either falls back to the other when only one is configured.
fn select_account(settings: &CompanySettings) -> Option<String> {
    let qr_iban = non_blank(settings.qr_iban.as_deref());
    let iban = non_blank(settings.iban.as_deref());
    match settings.qr_reference_type {
        ReferenceType::Qr => qr_iban.or(iban),
        ReferenceType::Scor | ReferenceType::Non => iban.or(qr_iban),
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(normalize_iban).filter(|v| !v.is_empty())
}

fn trimmed(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

//! Caller-supplied inputs: invoice, company settings and billing policy.
//!
//! These shapes are loosely validated on purpose; [`crate::BillPayload::from_invoice`]
//! normalizes them once at the boundary.

use serde::{Deserialize, Serialize};

/// How the creditor reference is derived from the invoice id.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceType {
    /// 27-digit QR reference from the digits of the invoice id.
    #[serde(rename = "QR")]
    Qr,
    /// ISO 11649 creditor reference from the alphanumerics of the invoice id.
    #[serde(rename = "SCOR")]
    Scor,
    /// No reference; the message falls back to `"Invoice {id}"`.
    #[default]
    #[serde(rename = "NON")]
    Non,
}

/// Free-form address as it arrives from customer or company records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartyInput {
    pub name: String,
    pub address: String,
    pub zip: String,
    pub city: String,
    /// Country code; anything other than two letters falls back to the policy default.
    pub country: String,
}

/// Invoice data needed to produce a payment slip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    /// Debtor.
    #[serde(default)]
    pub client: PartyInput,
    /// Amount in smallest currency unit (e.g., Rappen / cents).
    pub amount: u64,
    pub currency: String,
    /// Explicit unstructured message; overrides the `NON` fallback.
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub billing_information: Option<String>,
    #[serde(default)]
    pub alternative_schemes: Vec<String>,
}

/// Creditor settings of the issuing company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanySettings {
    pub name: String,
    pub address: String,
    pub zip: String,
    pub city: String,
    pub country: String,
    pub qr_iban: Option<String>,
    pub iban: Option<String>,
    pub qr_reference_type: ReferenceType,
}

impl CompanySettings {
    pub fn creditor_input(&self) -> PartyInput {
        PartyInput {
            name: self.name.clone(),
            address: self.address.clone(),
            zip: self.zip.clone(),
            city: self.city.clone(),
            country: self.country.clone(),
        }
    }
}

/// Deployment-level policy choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingPolicy {
    /// Country used when an address carries no recognizable two-letter code.
    pub default_country: String,
}

impl Default for BillingPolicy {
    fn default() -> Self {
        Self {
            default_country: "CH".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_type_deserializes_from_setting_strings() {
        let qr: ReferenceType = serde_json::from_str("\"QR\"").unwrap();
        let scor: ReferenceType = serde_json::from_str("\"SCOR\"").unwrap();
        let non: ReferenceType = serde_json::from_str("\"NON\"").unwrap();
        assert_eq!(qr, ReferenceType::Qr);
        assert_eq!(scor, ReferenceType::Scor);
        assert_eq!(non, ReferenceType::Non);
    }

    #[test]
    fn settings_tolerate_missing_fields() {
        let settings: CompanySettings =
            serde_json::from_str(r#"{"name":"Muster AG","iban":"CH9300762011623852957"}"#).unwrap();
        assert_eq!(settings.name, "Muster AG");
        assert_eq!(settings.qr_iban, None);
        assert_eq!(settings.qr_reference_type, ReferenceType::Non);
    }

    #[test]
    fn default_policy_falls_back_to_switzerland() {
        assert_eq!(BillingPolicy::default().default_country, "CH");
    }
}

//! Request handling behind the `qrbill` binary.

use anyhow::{Context, Result};
use serde::Deserialize;

use qrbill_payload::{BillPayload, BillingPolicy, CompanySettings, Invoice};

/// Environment variable overriding [`BillingPolicy::default_country`].
pub const DEFAULT_COUNTRY_VAR: &str = "QRBILL_DEFAULT_COUNTRY";

/// JSON request read by the binary.
#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub invoice: Invoice,
    pub settings: CompanySettings,
}

/// Policy for an optional default-country setting. Unset and blank values
/// both keep the built-in default.
pub fn policy_from_country(country: Option<&str>) -> BillingPolicy {
    match country.map(str::trim).filter(|c| !c.is_empty()) {
        Some(country) => BillingPolicy {
            default_country: country.to_string(),
        },
        None => BillingPolicy::default(),
    }
}

pub fn policy_from_env() -> BillingPolicy {
    policy_from_country(std::env::var(DEFAULT_COUNTRY_VAR).ok().as_deref())
}

/// Parse a JSON request and build its bill.
pub fn bill_from_request(raw: &str, policy: &BillingPolicy) -> Result<BillPayload> {
    let request: RenderRequest = serde_json::from_str(raw).context("failed to parse request")?;
    BillPayload::from_invoice(&request.invoice, &request.settings, policy)
        .with_context(|| format!("cannot build payment slip for invoice {}", request.invoice.id))
}

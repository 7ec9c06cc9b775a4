//! `qrbill`: print the Swiss Payments Code for an invoice.
//!
//! Usage: `qrbill <request.json>` where the request is
//! `{"invoice": {...}, "settings": {...}}`. The SPC text goes to stdout;
//! the human-readable reference and logs go to stderr.

use anyhow::{Context, Result};

use qrbill_cli::{bill_from_request, policy_from_env};
use qrbill_payload::format_reference_display;

fn main() -> Result<()> {
    qrbill_observability::init();

    let path = std::env::args()
        .nth(1)
        .context("usage: qrbill <request.json>")?;
    let raw = std::fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?;

    let policy = policy_from_env();
    let bill = bill_from_request(&raw, &policy).with_context(|| format!("request {path}"))?;

    tracing::info!(
        default_country = %policy.default_country,
        reference_kind = %bill.reference().kind(),
        reference = %format_reference_display(bill.reference().value(), bill.reference().kind()),
        "payment payload ready"
    );
    print!("{}", bill.encoded_text());
    Ok(())
}

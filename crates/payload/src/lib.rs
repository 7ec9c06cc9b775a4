//! Swiss Payments Code (SPC) payload construction.
//!
//! Turns caller-supplied invoice and company settings into a validated
//! [`BillPayload`] whose encoded text is the line-oriented SPC block that goes
//! into the QR symbol. Pure domain logic: no IO, no rendering.

pub mod bill;
pub mod format;
pub mod iban;
pub mod input;
pub mod parse;
pub mod party;
pub mod spc;

pub use bill::{BillParts, BillPayload};
pub use format::{
    assemble_address_block, format_amount_display, format_amount_for_payload,
    format_reference_display,
};
pub use input::{BillingPolicy, CompanySettings, Invoice, PartyInput, ReferenceType};
pub use parse::{ParsedParty, ParsedSpc, SPC_MAX_LINES, parse_spc};
pub use party::PartyAddress;
pub use spc::{SPC_LINE_SEPARATOR, build_spc};

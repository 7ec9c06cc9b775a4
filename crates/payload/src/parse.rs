//! SPC payload reader.
//!
//! Accepts CRLF or LF separators. Only the combined (`K`) address type is
//! understood. Its postal line is kept whole: zip codes may contain spaces
//! and may be absent, so the line cannot be split back into zip and city.

use qrbill_core::{QrBillError, QrBillResult};
use qrbill_reference::{PaymentReference, ReferenceKind};

use crate::spc::{
    ADDRESS_TYPE_COMBINED, CODING_UTF8, MAX_ALTERNATIVE_SCHEMES, QR_TYPE, SPC_MANDATORY_LINES,
    TRAILER, VERSION,
};

/// Most lines a payload may carry: mandatory block, billing information and
/// the alternative schemes.
pub const SPC_MAX_LINES: usize = SPC_MANDATORY_LINES + 1 + MAX_ALTERNATIVE_SCHEMES;

/// A combined-address party as it appears on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedParty {
    pub name: String,
    pub address: String,
    /// `"{zip} {city}"` as encoded.
    pub postal_line: String,
    pub country: String,
}

impl ParsedParty {
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.address.is_empty() && self.postal_line.is_empty()
    }
}

/// Fields read back from an SPC payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSpc {
    /// Creditor IBAN or QR-IBAN.
    pub account: Option<String>,
    pub creditor: ParsedParty,
    /// Amount in minor units; `None` when the amount line is blank.
    pub amount: Option<u64>,
    pub currency: String,
    pub debtor: ParsedParty,
    pub reference: PaymentReference,
    pub unstructured_message: String,
    pub billing_information: String,
    pub alternative_schemes: Vec<String>,
}

pub fn parse_spc(text: &str) -> QrBillResult<ParsedSpc> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < SPC_MANDATORY_LINES {
        return Err(QrBillError::encoding(format!(
            "payload has {} lines, expected at least {SPC_MANDATORY_LINES}",
            lines.len()
        )));
    }
    if lines.len() > SPC_MAX_LINES {
        return Err(QrBillError::encoding(format!(
            "payload has {} lines, expected at most {SPC_MAX_LINES}",
            lines.len()
        )));
    }
    expect_line(&lines, 0, QR_TYPE)?;
    expect_line(&lines, 1, VERSION)?;
    expect_line(&lines, 2, CODING_UTF8)?;
    expect_line(&lines, 30, TRAILER)?;

    let kind = ReferenceKind::from_code(lines[27]).ok_or_else(|| {
        QrBillError::encoding(format!("unknown reference type '{}'", lines[27]))
    })?;

    Ok(ParsedSpc {
        account: Some(lines[3].to_string()).filter(|a| !a.is_empty()),
        creditor: parse_party(&lines[4..11])?,
        amount: parse_amount(lines[18])?,
        currency: lines[19].to_string(),
        debtor: parse_party(&lines[20..27])?,
        reference: PaymentReference::new(kind, lines[28])?,
        unstructured_message: lines[29].to_string(),
        billing_information: lines.get(31).map(|l| l.to_string()).unwrap_or_default(),
        alternative_schemes: lines.iter().skip(32).map(|l| l.to_string()).collect(),
    })
}

fn expect_line(lines: &[&str], index: usize, expected: &str) -> QrBillResult<()> {
    if lines[index] == expected {
        Ok(())
    } else {
        Err(QrBillError::encoding(format!(
            "line {} is '{}', expected '{expected}'",
            index + 1,
            lines[index]
        )))
    }
}

/// Seven address lines: type, name, address, postal line, two placeholders, country.
fn parse_party(lines: &[&str]) -> QrBillResult<ParsedParty> {
    match lines[0] {
        "" => Ok(ParsedParty::default()),
        ADDRESS_TYPE_COMBINED => Ok(ParsedParty {
            name: lines[1].to_string(),
            address: lines[2].to_string(),
            postal_line: lines[3].to_string(),
            country: lines[6].to_string(),
        }),
        other => Err(QrBillError::encoding(format!("unsupported address type '{other}'"))),
    }
}

fn parse_amount(line: &str) -> QrBillResult<Option<u64>> {
    if line.is_empty() {
        return Ok(None);
    }
    let invalid = || QrBillError::encoding(format!("invalid amount '{line}'"));
    let (whole, decimals) = line.split_once('.').ok_or_else(invalid)?;
    if whole.is_empty()
        || decimals.len() != 2
        || !whole.bytes().chain(decimals.bytes()).all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }
    let whole: u64 = whole.parse().map_err(|_| invalid())?;
    let cents: u64 = decimals.parse().map_err(|_| invalid())?;
    whole
        .checked_mul(100)
        .and_then(|w| w.checked_add(cents))
        .map(Some)
        .ok_or_else(invalid)
}

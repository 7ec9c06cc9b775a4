//! Text formatting for the encoded payload and for the rendered panels.
//!
//! Payload formatting is fixed by the standard and never locale-dependent;
//! display formatting only affects the human-readable slip.

use qrbill_reference::ReferenceKind;

use crate::party::PartyAddress;

/// Amount as written into the payload: fixed two decimals, `.` separator,
/// no grouping (`1234.50`).
pub fn format_amount_for_payload(minor_units: u64) -> String {
    format!("{}.{:02}", minor_units / 100, minor_units % 100)
}

/// Amount as shown on the slip: thousands grouped with a space (`1 234.50`).
pub fn format_amount_display(minor_units: u64) -> String {
    let whole = (minor_units / 100).to_string();
    format!("{}.{:02}", group_from_right(&whole, 3, ' '), minor_units % 100)
}

/// Reference as shown on the slip.
///
/// - QRR: blocks of five from the right (`2-5-5-5-5-5` for 27 digits).
/// - SCOR: blocks of four from the left.
/// - NON: verbatim.
pub fn format_reference_display(value: &str, kind: ReferenceKind) -> String {
    match kind {
        ReferenceKind::Qrr => group_from_right(value, 5, ' '),
        ReferenceKind::Scor => group_from_left(value, 4, ' '),
        ReferenceKind::Non => value.to_string(),
    }
}

/// `[account, name, address, "{zip} {city}"]` without empty entries.
pub fn assemble_address_block(party: &PartyAddress) -> Vec<String> {
    [
        party.account().unwrap_or_default().to_string(),
        party.name().to_string(),
        party.address().to_string(),
        party.postal_line(),
    ]
    .into_iter()
    .filter(|line| !line.is_empty())
    .collect()
}

/// ASCII digits of `value`, in order.
pub fn digits_of(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// ASCII letters and digits of `value`, in order.
pub fn alnum_of(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

fn group_from_left(value: &str, size: usize, separator: char) -> String {
    let mut out = String::with_capacity(value.len() + value.len() / size);
    for (i, c) in value.chars().enumerate() {
        if i > 0 && i % size == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

fn group_from_right(value: &str, size: usize, separator: char) -> String {
    let len = value.chars().count();
    let mut out = String::with_capacity(value.len() + len / size);
    for (i, c) in value.chars().enumerate() {
        if i > 0 && (len - i) % size == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

//! QR reference (QRR): 26 payload digits followed by a mod10 recursive check digit.

/// Transition table of the mod10 recursive checksum.
const MOD10_TABLE: [u8; 10] = [0, 9, 4, 6, 8, 2, 7, 1, 3, 5];

/// Number of payload digits preceding the check digit.
pub const QRR_PAYLOAD_DIGITS: usize = 26;

/// Total length of a QR reference.
pub const QRR_LENGTH: usize = QRR_PAYLOAD_DIGITS + 1;

/// Check digit for a sequence of decimal digits (values `0..=9`).
fn mod10_check_digit(digits: impl IntoIterator<Item = u8>) -> u8 {
    let carry = digits
        .into_iter()
        .fold(0u8, |carry, digit| MOD10_TABLE[usize::from((carry + digit) % 10)]);
    (10 - carry) % 10
}

/// Derive a 27-digit QR reference from arbitrary input.
///
/// Non-digit characters are dropped, the remaining digits are left-padded with
/// zeros to 26 (or reduced to their last 26 when longer) and the check digit is
/// appended.
pub fn generate_qr_reference(raw_input: &str) -> String {
    let digits: Vec<u8> = raw_input
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect();

    let tail = &digits[digits.len().saturating_sub(QRR_PAYLOAD_DIGITS)..];
    let mut payload = vec![0u8; QRR_PAYLOAD_DIGITS - tail.len()];
    payload.extend_from_slice(tail);

    let check = mod10_check_digit(payload.iter().copied());

    let mut reference: String = payload.iter().map(|d| char::from(b'0' + d)).collect();
    reference.push(char::from(b'0' + check));
    reference
}

/// Whether `value` is exactly 27 ASCII digits whose last digit is the mod10
/// check digit of the preceding 26.
pub fn verify_qr_reference(value: &str) -> bool {
    if value.len() != QRR_LENGTH || !value.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let digits: Vec<u8> = value.bytes().map(|b| b - b'0').collect();
    mod10_check_digit(digits[..QRR_PAYLOAD_DIGITS].iter().copied()) == digits[QRR_PAYLOAD_DIGITS]
}

//! IBAN normalization and QR-IBAN detection.

/// Remove all whitespace and uppercase.
pub fn normalize_iban(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Whether a normalized IBAN is a Swiss/Liechtenstein QR-IBAN.
///
/// QR-IBANs carry an institution id (IBAN positions 5-9) in `30000..=31999`.
pub fn is_qr_iban(iban: &str) -> bool {
    if !(iban.starts_with("CH") || iban.starts_with("LI")) {
        return false;
    }
    iban.get(4..9)
        .and_then(|iid| iid.parse::<u32>().ok())
        .is_some_and(|iid| (30000..=31999).contains(&iid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_stripped_and_letters_uppercased() {
        assert_eq!(normalize_iban(" ch44 3199 9123 0008 8901 2 "), "CH4431999123000889012");
    }

    #[test]
    fn qr_iban_is_detected_by_institution_id() {
        assert!(is_qr_iban("CH4431999123000889012"));
        assert!(is_qr_iban("LI2130000000000000000"));
        assert!(!is_qr_iban("CH9300762011623852957"));
        assert!(!is_qr_iban("DE4431999123000889012"));
        assert!(!is_qr_iban("CH44"));
    }
}

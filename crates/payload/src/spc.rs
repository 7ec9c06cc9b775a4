//! Swiss Payments Code (SPC v0200) encoder.
//!
//! Line position carries meaning: blank lines are placeholders and are never
//! dropped.

use tracing::debug;

use qrbill_core::{FieldLimit, QrBillError, QrBillResult};

use crate::bill::BillParts;
use crate::format::format_amount_for_payload;
use crate::party::PartyAddress;

pub const QR_TYPE: &str = "SPC";
pub const VERSION: &str = "0200";
pub const CODING_UTF8: &str = "1";
pub const ADDRESS_TYPE_COMBINED: &str = "K";
pub const TRAILER: &str = "EPD";

/// Line separator of the encoded payload.
pub const SPC_LINE_SEPARATOR: &str = "\r\n";

/// Number of mandatory lines (header through `EPD` trailer).
pub const SPC_MANDATORY_LINES: usize = 31;

/// Currencies accepted by SPC v0200.
pub const SUPPORTED_CURRENCIES: [&str; 2] = ["CHF", "EUR"];

/// Largest encodable amount, in minor units (999 999 999.99).
pub const MAX_AMOUNT_MINOR_UNITS: u64 = 99_999_999_999;

pub const MAX_ALTERNATIVE_SCHEMES: usize = 2;

/// Build the ordered SPC lines for a bill.
///
/// Emits exactly [`SPC_MANDATORY_LINES`] lines, followed by the billing
/// information line and alternative scheme lines only when either is present.
pub fn build_spc(bill: &BillParts) -> QrBillResult<Vec<String>> {
    validate_creditor(&bill.creditor)?;
    validate_fields(bill)?;

    let mut lines: Vec<String> = Vec::with_capacity(SPC_MANDATORY_LINES + 1 + bill.alternative_schemes.len());

    // Header
    lines.push(QR_TYPE.to_string());
    lines.push(VERSION.to_string());
    lines.push(CODING_UTF8.to_string());

    // Creditor
    lines.push(bill.creditor.account().unwrap_or_default().to_string());
    push_party(&mut lines, &bill.creditor);

    // Ultimate creditor (reserved for future use)
    lines.extend(std::iter::repeat_n(String::new(), 7));

    // Payment amount
    lines.push(format_amount_for_payload(bill.amount));
    lines.push(bill.currency.clone());

    // Ultimate debtor
    push_party(&mut lines, &bill.debtor);

    // Reference
    lines.push(bill.reference.kind().code().to_string());
    lines.push(bill.reference.value().to_string());

    // Additional information
    lines.push(bill.unstructured_message.clone());
    lines.push(TRAILER.to_string());
    if !bill.billing_information.is_empty() || !bill.alternative_schemes.is_empty() {
        lines.push(bill.billing_information.clone());
    }
    lines.extend(bill.alternative_schemes.iter().cloned());

    debug!(
        lines = lines.len(),
        reference_kind = %bill.reference.kind(),
        "encoded swiss payments code"
    );
    Ok(lines)
}

/// Combined address (`K`): type, name, address line, postal line, two blank
/// structured placeholders, country. A blank party leaves all seven lines empty.
fn push_party(lines: &mut Vec<String>, party: &PartyAddress) {
    if party.is_blank() {
        lines.extend(std::iter::repeat_n(String::new(), 7));
        return;
    }
    lines.push(ADDRESS_TYPE_COMBINED.to_string());
    lines.push(party.name().to_string());
    lines.push(party.address().to_string());
    lines.push(party.postal_line());
    lines.push(String::new());
    lines.push(String::new());
    lines.push(party.country().to_string());
}

/// Creditor must be identifiable and reachable.
pub fn validate_creditor(creditor: &PartyAddress) -> QrBillResult<()> {
    let missing: Vec<&str> = [
        ("name", creditor.name()),
        ("address", creditor.address()),
        ("zip", creditor.zip()),
        ("city", creditor.city()),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(field, _)| field)
    .collect();

    if !missing.is_empty() {
        return Err(QrBillError::configuration(format!(
            "creditor is missing: {}",
            missing.join(", ")
        )));
    }
    if creditor.account().is_none() {
        return Err(QrBillError::configuration(
            "creditor has neither a QR-IBAN nor an IBAN",
        ));
    }
    Ok(())
}

fn ensure_fits(value: &str, limit: FieldLimit) -> QrBillResult<()> {
    if limit.fits(value) {
        Ok(())
    } else {
        Err(QrBillError::encoding(format!(
            "{} exceeds {} characters",
            limit.label(),
            limit.max_chars()
        )))
    }
}

fn validate_fields(bill: &BillParts) -> QrBillResult<()> {
    if !SUPPORTED_CURRENCIES.contains(&bill.currency.as_str()) {
        return Err(QrBillError::encoding(format!(
            "currency '{}' is not supported (expected CHF or EUR)",
            bill.currency
        )));
    }
    if bill.amount > MAX_AMOUNT_MINOR_UNITS {
        return Err(QrBillError::encoding("amount exceeds 999999999.99"));
    }

    let free_text = [&bill.creditor, &bill.debtor]
        .into_iter()
        .flat_map(|p| [p.name(), p.address(), p.zip(), p.city()])
        .chain([bill.unstructured_message.as_str(), bill.billing_information.as_str()])
        .chain(bill.alternative_schemes.iter().map(String::as_str));
    for value in free_text {
        if value.contains(['\r', '\n']) {
            return Err(QrBillError::encoding(format!(
                "field '{value}' contains a line break"
            )));
        }
    }

    for party in [&bill.creditor, &bill.debtor] {
        ensure_fits(party.name(), FieldLimit::Name)?;
        ensure_fits(party.address(), FieldLimit::Address)?;
        ensure_fits(party.zip(), FieldLimit::Zip)?;
        ensure_fits(party.city(), FieldLimit::City)?;
    }

    ensure_fits(&bill.unstructured_message, FieldLimit::Message)?;
    ensure_fits(&bill.billing_information, FieldLimit::BillingInformation)?;

    if bill.alternative_schemes.len() > MAX_ALTERNATIVE_SCHEMES {
        return Err(QrBillError::encoding(format!(
            "at most {MAX_ALTERNATIVE_SCHEMES} alternative schemes are allowed"
        )));
    }
    for scheme in &bill.alternative_schemes {
        ensure_fits(scheme, FieldLimit::AlternativeScheme)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PartyInput;
    use proptest::prelude::*;
    use qrbill_reference::PaymentReference;

    fn creditor() -> PartyAddress {
        PartyAddress::normalize(
            &PartyInput {
                name: "Robert Schneider AG".to_string(),
                address: "Rue du Lac 1268".to_string(),
                zip: "2501".to_string(),
                city: "Biel".to_string(),
                country: "CH".to_string(),
            },
            Some("CH4431999123000889012"),
            "CH",
        )
        .unwrap()
    }

    fn debtor() -> PartyAddress {
        PartyAddress::normalize(
            &PartyInput {
                name: "Pia-Maria Rutschmann-Schnyder".to_string(),
                address: "Grosse Marktgasse 28".to_string(),
                zip: "9400".to_string(),
                city: "Rorschach".to_string(),
                country: "CH".to_string(),
            },
            None,
            "CH",
        )
        .unwrap()
    }

    fn parts() -> BillParts {
        BillParts {
            currency: "CHF".to_string(),
            amount: 199_995,
            creditor: creditor(),
            debtor: debtor(),
            reference: PaymentReference::qr_from("21000000000313947143000901"),
            unstructured_message: "Order of 15.06.2020".to_string(),
            billing_information: String::new(),
            alternative_schemes: Vec::new(),
        }
    }

    #[test]
    fn lines_follow_the_canonical_order() {
        let lines = build_spc(&parts()).unwrap();
        let expected = vec![
            "SPC",
            "0200",
            "1",
            "CH4431999123000889012",
            "K",
            "Robert Schneider AG",
            "Rue du Lac 1268",
            "2501 Biel",
            "",
            "",
            "CH",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "1999.95",
            "CHF",
            "K",
            "Pia-Maria Rutschmann-Schnyder",
            "Grosse Marktgasse 28",
            "9400 Rorschach",
            "",
            "",
            "CH",
            "QRR",
            "210000000003139471430009017",
            "Order of 15.06.2020",
            "EPD",
        ];
        assert_eq!(lines, expected);
    }

    #[test]
    fn blank_debtor_keeps_placeholders() {
        let mut bill = parts();
        bill.debtor = PartyAddress::default();
        bill.reference = PaymentReference::none();
        bill.unstructured_message = String::new();

        let lines = build_spc(&bill).unwrap();
        assert_eq!(lines.len(), SPC_MANDATORY_LINES);
        assert!(lines[20..27].iter().all(String::is_empty));
        assert_eq!(lines[27], "NON");
        assert_eq!(lines[28], "");
        assert_eq!(lines[30], TRAILER);
    }

    #[test]
    fn billing_information_and_schemes_follow_the_trailer() {
        let mut bill = parts();
        bill.alternative_schemes = vec!["eBill/B/41010560425610173".to_string()];
        let lines = build_spc(&bill).unwrap();
        assert_eq!(lines.len(), SPC_MANDATORY_LINES + 2);
        assert_eq!(lines[30], "EPD");
        assert_eq!(lines[31], "");
        assert_eq!(lines[32], "eBill/B/41010560425610173");

        bill.billing_information = "//S1/10/10201409/11/200701/30/106017086".to_string();
        bill.alternative_schemes.clear();
        let lines = build_spc(&bill).unwrap();
        assert_eq!(lines.len(), SPC_MANDATORY_LINES + 1);
        assert_eq!(lines[31], "//S1/10/10201409/11/200701/30/106017086");
    }

    #[test]
    fn unsupported_currency_is_an_encoding_error() {
        let mut bill = parts();
        bill.currency = "USD".to_string();
        assert!(matches!(build_spc(&bill), Err(QrBillError::Encoding(_))));
    }

    #[test]
    fn overlong_message_is_an_encoding_error() {
        let mut bill = parts();
        bill.unstructured_message = "x".repeat(141);
        match build_spc(&bill) {
            Err(QrBillError::Encoding(msg)) if msg.contains("unstructured message") => {}
            other => panic!("Expected Encoding error for long message, got {other:?}"),
        }
    }

    #[test]
    fn line_breaks_in_free_text_are_an_encoding_error() {
        let mut bill = parts();
        bill.unstructured_message = "first\nsecond".to_string();
        assert!(matches!(build_spc(&bill), Err(QrBillError::Encoding(_))));
    }

    #[test]
    fn too_many_schemes_is_an_encoding_error() {
        let mut bill = parts();
        bill.alternative_schemes = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert!(matches!(build_spc(&bill), Err(QrBillError::Encoding(_))));
    }

    #[test]
    fn amount_above_maximum_is_an_encoding_error() {
        let mut bill = parts();
        bill.amount = MAX_AMOUNT_MINOR_UNITS;
        assert!(build_spc(&bill).is_ok());
        bill.amount = MAX_AMOUNT_MINOR_UNITS + 1;
        assert!(matches!(build_spc(&bill), Err(QrBillError::Encoding(_))));
    }

    #[test]
    fn creditor_without_account_is_a_configuration_error() {
        let mut bill = parts();
        bill.creditor.account = None;
        assert!(matches!(build_spc(&bill), Err(QrBillError::Configuration(_))));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the mandatory line count never depends on which optional fields are empty.
        #[test]
        fn mandatory_line_count_is_fixed(
            amount in 0u64..=MAX_AMOUNT_MINOR_UNITS,
            message in "[A-Za-z0-9 ]{0,140}",
            blank_debtor in any::<bool>(),
            with_reference in any::<bool>(),
        ) {
            let mut bill = parts();
            bill.amount = amount;
            bill.unstructured_message = message;
            if blank_debtor {
                bill.debtor = PartyAddress::default();
            }
            if !with_reference {
                bill.reference = PaymentReference::none();
            }
            let lines = build_spc(&bill).unwrap();
            prop_assert_eq!(lines.len(), SPC_MANDATORY_LINES);
            prop_assert_eq!(lines[18].matches('.').count(), 1);
            prop_assert_eq!(lines[18].split_once('.').map(|(_, d)| d.len()), Some(2));
        }
    }
}

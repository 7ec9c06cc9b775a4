use qrbill_cli::{bill_from_request, policy_from_country};
use qrbill_payload::{BillingPolicy, parse_spc};

const REQUEST: &str = r#"{
    "invoice": {
        "id": "INV-0001",
        "client": {"name": "Max Muster", "address": "Hauptgasse 5", "zip": "3000", "city": "Bern", "country": ""},
        "amount": 123450,
        "currency": "CHF"
    },
    "settings": {
        "name": "Muster AG",
        "address": "Bahnhofstrasse 1",
        "zip": "8001",
        "city": "Zürich",
        "country": "CH",
        "qr_iban": "CH44 3199 9123 0008 8901 2",
        "qr_reference_type": "QR"
    }
}"#;

#[test]
fn blank_default_country_counts_as_unset() {
    assert_eq!(policy_from_country(None), BillingPolicy::default());
    assert_eq!(policy_from_country(Some("")), BillingPolicy::default());
    assert_eq!(policy_from_country(Some("   ")), BillingPolicy::default());
}

#[test]
fn explicit_default_country_is_trimmed_and_kept() {
    assert_eq!(policy_from_country(Some(" LI ")).default_country, "LI");
}

#[test]
fn blank_default_country_still_produces_a_bill() {
    let bill = bill_from_request(REQUEST, &policy_from_country(Some(""))).unwrap();
    let parsed = parse_spc(bill.encoded_text()).unwrap();
    assert_eq!(parsed.debtor.country, "CH");
    assert_eq!(parsed.amount, Some(123_450));
    assert_eq!(parsed.reference.value(), "000000000000000000000000011");
}

#[test]
fn configured_default_country_fills_missing_debtor_country() {
    let bill = bill_from_request(REQUEST, &policy_from_country(Some("LI"))).unwrap();
    assert!(bill.encoded_text().starts_with("SPC\r\n0200\r\n1\r\n"));
    assert_eq!(parse_spc(bill.encoded_text()).unwrap().debtor.country, "LI");
}

#[test]
fn malformed_request_is_reported() {
    let err = bill_from_request("{\"invoice\": {}}", &BillingPolicy::default()).unwrap_err();
    assert!(err.to_string().contains("failed to parse request"));
}

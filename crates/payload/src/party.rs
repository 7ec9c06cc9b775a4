use serde::Serialize;
use tracing::warn;

use qrbill_core::{FieldLimit, QrBillError, QrBillResult, ValueObject, truncate_chars};

use crate::iban::normalize_iban;
use crate::input::PartyInput;

/// Normalized creditor or debtor address.
///
/// Invariants: free-text fields are trimmed and truncated to their mandated
/// lengths; `country` is empty (blank party) or two uppercase ASCII letters;
/// `account` is whitespace-free and uppercase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PartyAddress {
    pub(crate) name: String,
    pub(crate) address: String,
    pub(crate) zip: String,
    pub(crate) city: String,
    pub(crate) country: String,
    pub(crate) account: Option<String>,
}

impl ValueObject for PartyAddress {}

impl PartyAddress {
    /// Normalize a raw address.
    ///
    /// A party without name, address, zip and city is blank and keeps an empty
    /// country. Otherwise the country is uppercased; input that is not two ASCII
    /// letters falls back to `default_country`.
    pub fn normalize(
        input: &PartyInput,
        account: Option<&str>,
        default_country: &str,
    ) -> QrBillResult<Self> {
        let mut party = Self {
            name: truncate_chars(&input.name, FieldLimit::Name),
            address: truncate_chars(&input.address, FieldLimit::Address),
            zip: truncate_chars(&input.zip, FieldLimit::Zip),
            city: truncate_chars(&input.city, FieldLimit::City),
            country: String::new(),
            account: account.map(normalize_iban).filter(|a| !a.is_empty()),
        };
        if !party.is_blank() {
            party.country = normalize_country(&input.country, default_country)?;
        }
        Ok(party)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    /// `"{zip} {city}"`, trimmed when either half is missing.
    pub fn postal_line(&self) -> String {
        format!("{} {}", self.zip, self.city).trim().to_string()
    }

    /// Whether the party carries no address data at all.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.address.is_empty() && self.zip.is_empty() && self.city.is_empty()
    }
}

/// Uppercase two-letter country code, or `default_country` when `raw` is not one.
pub fn normalize_country(raw: &str, default_country: &str) -> QrBillResult<String> {
    if let Some(code) = as_country_code(raw) {
        return Ok(code);
    }
    let fallback = as_country_code(default_country).ok_or_else(|| {
        QrBillError::encoding(format!(
            "country '{raw}' is not a two-letter code and default '{default_country}' is unusable"
        ))
    })?;
    warn!(input = raw, fallback = %fallback, "unrecognized country code, using default");
    Ok(fallback)
}

fn as_country_code(raw: &str) -> Option<String> {
    let code = raw.trim();
    (code.len() == 2 && code.bytes().all(|b| b.is_ascii_alphabetic())).then(|| code.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, country: &str) -> PartyInput {
        PartyInput {
            name: name.to_string(),
            address: "Bahnhofstrasse 1".to_string(),
            zip: "8001".to_string(),
            city: "Zürich".to_string(),
            country: country.to_string(),
        }
    }

    #[test]
    fn country_is_uppercased() {
        let party = PartyAddress::normalize(&input("Muster AG", " de "), None, "CH").unwrap();
        assert_eq!(party.country(), "DE");
    }

    #[test]
    fn unrecognized_country_falls_back_to_default() {
        for raw in ["", "Switzerland", "C1", "CHE"] {
            let party = PartyAddress::normalize(&input("Muster AG", raw), None, "ch").unwrap();
            assert_eq!(party.country(), "CH", "input {raw:?}");
        }
    }

    #[test]
    fn unusable_default_country_is_an_encoding_error() {
        let err = PartyAddress::normalize(&input("Muster AG", "Schweiz"), None, "").unwrap_err();
        match err {
            QrBillError::Encoding(msg) if msg.contains("Schweiz") => {}
            _ => panic!("Expected Encoding error for unnormalizable country"),
        }
    }

    #[test]
    fn long_fields_are_truncated_before_use() {
        let mut raw = input(&"N".repeat(100), "CH");
        raw.zip = "1".repeat(20);
        let party = PartyAddress::normalize(&raw, None, "CH").unwrap();
        assert_eq!(party.name().chars().count(), 70);
        assert_eq!(party.zip().len(), 16);
    }

    #[test]
    fn account_is_normalized_and_blank_account_dropped() {
        let party =
            PartyAddress::normalize(&input("Muster AG", "CH"), Some("ch93 0076 2011 6238 5295 7"), "CH")
                .unwrap();
        assert_eq!(party.account(), Some("CH9300762011623852957"));

        let party = PartyAddress::normalize(&input("Muster AG", "CH"), Some("   "), "CH").unwrap();
        assert_eq!(party.account(), None);
    }

    #[test]
    fn blank_party_keeps_empty_country() {
        let party = PartyAddress::normalize(&PartyInput::default(), None, "CH").unwrap();
        assert!(party.is_blank());
        assert_eq!(party.country(), "");
        assert_eq!(party.postal_line(), "");
    }
}

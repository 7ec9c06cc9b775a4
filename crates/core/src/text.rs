//! Field length limits mandated by the Swiss Implementation Guidelines.

/// Maximum lengths (in characters) of free-text payload fields.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldLimit {
    /// Party name.
    Name,
    /// Street / address line.
    Address,
    /// Postal code.
    Zip,
    /// Town.
    City,
    /// Unstructured message.
    Message,
    /// Structured billing information.
    BillingInformation,
    /// One alternative procedure parameter line.
    AlternativeScheme,
    /// Creditor reference (ISO 11649).
    ScorReference,
}

impl FieldLimit {
    pub const fn max_chars(self) -> usize {
        match self {
            FieldLimit::Name | FieldLimit::Address | FieldLimit::City => 70,
            FieldLimit::Zip => 16,
            FieldLimit::Message | FieldLimit::BillingInformation => 140,
            FieldLimit::AlternativeScheme => 100,
            FieldLimit::ScorReference => 25,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FieldLimit::Name => "name",
            FieldLimit::Address => "address",
            FieldLimit::Zip => "zip",
            FieldLimit::City => "city",
            FieldLimit::Message => "unstructured message",
            FieldLimit::BillingInformation => "billing information",
            FieldLimit::AlternativeScheme => "alternative scheme",
            FieldLimit::ScorReference => "creditor reference",
        }
    }

    /// Whether `value` fits within this limit.
    pub fn fits(self, value: &str) -> bool {
        value.chars().count() <= self.max_chars()
    }
}

/// Trim surrounding whitespace and keep at most `limit.max_chars()` characters.
///
/// Counts `char`s, never bytes, so multi-byte names (`Zürich`, `Genève`) are
/// never split inside a code point.
pub fn truncate_chars(value: &str, limit: FieldLimit) -> String {
    value.trim().chars().take(limit.max_chars()).collect()
}

//! ISO 11649 creditor reference (SCOR), checked with ISO 7064 mod97-10.

const PREFIX: &str = "RF";

/// Remainder of the numeric expansion of `chars` modulo 97.
///
/// Digits pass through, letters expand to two digits (`A`/`a` = 10 .. `Z`/`z` = 35).
/// The expansion is folded digit by digit, so arbitrarily long input never
/// needs a big-number type. Characters outside `[0-9A-Za-z]` carry no value.
fn mod97(chars: impl IntoIterator<Item = char>) -> u32 {
    chars.into_iter().fold(0u32, |acc, c| {
        let value = match c {
            '0'..='9' => c as u32 - '0' as u32,
            'A'..='Z' => c as u32 - 55,
            'a'..='z' => c as u32 - 87,
            _ => return acc,
        };
        if value < 10 {
            (acc * 10 + value) % 97
        } else {
            (acc * 100 + value) % 97
        }
    })
}

/// Build `"RF" + check digits + raw_input` (whitespace removed).
///
/// The check digits are `98 - (expand(raw_input + "RF00") mod 97)`, zero-padded
/// to two digits. The raw input is preserved verbatim after the check digits.
pub fn generate_scor_reference(raw_input: &str) -> String {
    let compact: String = raw_input.chars().filter(|c| !c.is_whitespace()).collect();
    let remainder = mod97(compact.chars().chain("RF00".chars()));
    format!("{PREFIX}{:02}{compact}", 98 - remainder)
}

/// Whether `value` is a well-formed creditor reference: `RF`, two check digits,
/// alphanumeric body, and remainder 1 mod 97 once the first four characters are
/// moved to the end.
pub fn verify_scor_reference(value: &str) -> bool {
    if !value.starts_with(PREFIX) || value.len() < 4 {
        return false;
    }
    if !value.is_char_boundary(4) {
        return false;
    }
    let (head, body) = value.split_at(4);
    if !head[2..].bytes().all(|b| b.is_ascii_digit())
        || !body.bytes().all(|b| b.is_ascii_alphanumeric())
    {
        return false;
    }
    mod97(body.chars().chain(head.chars())) == 1
}

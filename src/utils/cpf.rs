/// Number of digits in a CPF, including both check digits
pub const CPF_LEN: usize = 11;

// Repeated-digit sequences satisfy the checksum but are never issued
const DEGENERATE_SEQUENCES: [&str; 10] = [
    "00000000000",
    "11111111111",
    "22222222222",
    "33333333333",
    "44444444444",
    "55555555555",
    "66666666666",
    "77777777777",
    "88888888888",
    "99999999999",
];

/// Strips every character that is not an ASCII digit, keeping order.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Checks a CPF against its two check digits.
/// Punctuation is ignored; anything that does not reduce to 11 digits is invalid.
pub fn validate(raw: &str) -> bool {
    let canonical = normalize(raw);

    if canonical.len() != CPF_LEN {
        return false;
    }

    if DEGENERATE_SEQUENCES.contains(&canonical.as_str()) {
        return false;
    }

    let digits: Vec<u32> = canonical.chars().filter_map(|c| c.to_digit(10)).collect();

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

/// Renders a CPF as `XXX.XXX.XXX-XX`.
/// Input that does not reduce to 11 digits is returned as given.
pub fn format(raw: &str) -> String {
    let canonical = normalize(raw);

    if canonical.len() != CPF_LEN {
        return raw.to_string();
    }

    format!(
        "{}.{}.{}-{}",
        &canonical[..3],
        &canonical[3..6],
        &canonical[6..9],
        &canonical[9..]
    )
}

// Weights run from len + 1 down to 2
fn check_digit(digits: &[u32]) -> u32 {
    let top_weight = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (top_weight - i as u32))
        .sum();

    let remainder = 11 - (sum % 11);
    if remainder >= 10 {
        0
    } else {
        remainder
    }
}

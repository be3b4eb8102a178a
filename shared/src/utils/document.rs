//! Helpers for Brazilian document numbers

/// Keep only ASCII digits, dropping punctuation and whitespace
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Mask an 11-digit CPF for logs, e.g. `123.***.***-09`
///
/// Input that is not exactly 11 digits is fully masked.
pub fn mask_cpf_digits(digits: &str) -> String {
    if digits.len() != 11 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return String::from("***.***.***-**");
    }
    format!("{}.***.***-{}", &digits[0..3], &digits[9..11])
}

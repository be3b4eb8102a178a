//! Brazilian individual taxpayer id (CPF).

use std::fmt;
use std::str::FromStr;

use ff_shared::document::{digits_only, mask_cpf_digits};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

const FIELD: &str = "cpf";

/// Number of digits in a normalized CPF
pub const CPF_LENGTH: usize = 11;

/// A validated CPF, stored as its 11 digits
///
/// Construction strips punctuation, so `"111.444.777-35"` and
/// `"11144477735"` produce equal values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    /// Validate and normalize a raw CPF
    ///
    /// # Errors
    ///
    /// * `Required` - input is empty or only whitespace
    /// * `InvalidFormat` - not 11 digits after stripping, or all digits equal
    /// * `InvalidCheckDigit` - either verification digit does not match
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::required(FIELD));
        }

        let normalized = digits_only(raw);
        if normalized.len() != CPF_LENGTH {
            return Err(ValidationError::invalid_format(FIELD));
        }

        let digits: Vec<u32> = normalized
            .bytes()
            .map(|b| u32::from(b - b'0'))
            .collect();

        if digits.iter().all(|&d| d == digits[0]) {
            return Err(ValidationError::invalid_format(FIELD));
        }

        let (first, second) = check_digits(&digits[..9]);
        if digits[9] != first || digits[10] != second {
            return Err(ValidationError::invalid_check_digit(FIELD));
        }

        Ok(Self(normalized))
    }

    /// The 11 normalized digits
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Log-safe rendering, e.g. `111.***.***-35`
    pub fn masked(&self) -> String {
        mask_cpf_digits(&self.0)
    }
}

/// Compute both verification digits for the first nine digits of a CPF
fn check_digits(base: &[u32]) -> (u32, u32) {
    let first = weighted_digit(base, 10);
    let mut extended = base.to_vec();
    extended.push(first);
    let second = weighted_digit(&extended, 11);
    (first, second)
}

/// Weights run from `first_weight` down to 2
fn weighted_digit(digits: &[u32], first_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip((2..=first_weight).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();

    match (sum * 10) % 11 {
        10 => 0,
        remainder => remainder,
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.0;
        write!(f, "{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
    }
}

impl FromStr for Cpf {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cpf {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn build_valid(base: [u32; 9]) -> String {
        let (first, second) = check_digits(&base);
        base.iter()
            .chain([first, second].iter())
            .map(|d| char::from_digit(*d, 10).unwrap())
            .collect()
    }

    #[test]
    fn test_known_valid_cpfs() {
        for raw in ["11144477735", "12345678909", "01234567890", "52998224725"] {
            assert!(Cpf::parse(raw).is_ok(), "{} should be valid", raw);
        }
    }

    #[test]
    fn test_formatted_input_is_normalized() {
        let cpf = Cpf::parse("111.444.777-35").unwrap();
        assert_eq!(cpf.as_str(), "11144477735");
        assert_eq!(cpf.to_string(), "111.444.777-35");
        assert_eq!(cpf, Cpf::parse(" 111 444 777 35 ").unwrap());
    }

    #[test]
    fn test_display_keeps_leading_zero() {
        let cpf = Cpf::parse("01234567890").unwrap();
        assert_eq!(cpf.to_string(), "012.345.678-90");
    }

    #[test]
    fn test_blank_input_is_required() {
        assert_eq!(Cpf::parse(""), Err(ValidationError::required("cpf")));
        assert_eq!(Cpf::parse("   "), Err(ValidationError::required("cpf")));
    }

    #[test]
    fn test_wrong_length_is_invalid_format() {
        assert_eq!(Cpf::parse("123"), Err(ValidationError::invalid_format("cpf")));
        assert_eq!(
            Cpf::parse("111444777351"),
            Err(ValidationError::invalid_format("cpf"))
        );
        assert_eq!(Cpf::parse("abc"), Err(ValidationError::invalid_format("cpf")));
    }

    #[test]
    fn test_repeated_digits_rejected() {
        for digit in 0..=9 {
            let raw: String = std::iter::repeat(char::from_digit(digit, 10).unwrap())
                .take(11)
                .collect();
            assert_eq!(
                Cpf::parse(&raw),
                Err(ValidationError::invalid_format("cpf")),
                "{}",
                raw
            );
        }
    }

    #[test]
    fn test_wrong_check_digits() {
        for raw in ["12345678901", "11144477734", "11144477736", "11144477725"] {
            assert_eq!(
                Cpf::parse(raw),
                Err(ValidationError::invalid_check_digit("cpf")),
                "{}",
                raw
            );
        }
    }

    #[test]
    fn test_masked() {
        let cpf = Cpf::parse("11144477735").unwrap();
        assert_eq!(cpf.masked(), "111.***.***-35");
    }

    #[test]
    fn test_serde_uses_digits_and_revalidates() {
        let cpf = Cpf::parse("111.444.777-35").unwrap();
        let json = serde_json::to_string(&cpf).unwrap();
        assert_eq!(json, "\"11144477735\"");

        let back: Cpf = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cpf);

        assert!(serde_json::from_str::<Cpf>("\"12345678901\"").is_err());
    }

    #[test]
    fn test_from_str_and_try_from() {
        let parsed: Cpf = "123.456.789-09".parse().unwrap();
        let converted = Cpf::try_from(String::from("12345678909")).unwrap();
        assert_eq!(parsed, converted);
    }

    proptest! {
        #[test]
        fn prop_generated_cpfs_are_valid(base in prop::array::uniform9(0u32..10)) {
            prop_assume!(base.iter().any(|&d| d != base[0]));
            let raw = build_valid(base);
            let cpf = Cpf::parse(&raw).unwrap();
            prop_assert_eq!(cpf.as_str(), raw.as_str());
        }

        #[test]
        fn prop_normalization_is_idempotent(base in prop::array::uniform9(0u32..10)) {
            prop_assume!(base.iter().any(|&d| d != base[0]));
            let cpf = Cpf::parse(&build_valid(base)).unwrap();
            let reparsed = Cpf::parse(&cpf.to_string()).unwrap();
            prop_assert_eq!(reparsed, cpf);
        }

        #[test]
        fn prop_single_digit_mutation_fails(
            base in prop::array::uniform9(0u32..10),
            position in 0usize..9,
            delta in 1u32..10,
        ) {
            let (first, _) = check_digits(&base);
            // With a zero first digit the 10 -> 0 reduction lets some mutations pass
            prop_assume!(first != 0);

            let valid = build_valid(base);
            let mut digits: Vec<u32> = valid.chars().map(|c| c.to_digit(10).unwrap()).collect();
            digits[position] = (digits[position] + delta) % 10;
            let mutated: String = digits
                .iter()
                .map(|d| char::from_digit(*d, 10).unwrap())
                .collect();

            prop_assert!(Cpf::parse(&mutated).is_err());
        }
    }
}

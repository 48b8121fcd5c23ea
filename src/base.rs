//! Base-N integer parsing.

use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::{Result, SecretError};

/// Digit alphabet shared by every base; a symbol's position is its value.
pub const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

/// Value of a single digit, case-insensitive. `None` outside the alphabet.
pub fn digit_value(c: char) -> Option<u32> {
    let lower = c.to_ascii_lowercase();
    if !lower.is_ascii() {
        return None;
    }
    DIGITS
        .iter()
        .position(|&d| d == lower as u8)
        .map(|pos| pos as u32)
}

/// Convert a signed string representation of a number in `base` into a BigInt.
///
/// A leading `+` or `-` is accepted and `_` separators are ignored.
pub fn parse_base(text: &str, base: u32) -> Result<BigInt> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(SecretError::InvalidBase(base.to_string()));
    }

    let (negative, digits) = match text.as_bytes().first().copied() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let b = BigInt::from(base);
    let mut result = BigInt::zero();
    let mut seen_digit = false;
    for ch in digits.chars().filter(|&ch| ch != '_') {
        let digit = digit_value(ch)
            .filter(|&d| d < base)
            .ok_or(SecretError::InvalidCharacter { character: ch, base })?;
        result = result * &b + digit;
        seen_digit = true;
    }

    if !seen_digit {
        return Err(SecretError::EmptyValue);
    }
    Ok(if negative { -result } else { result })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn big(v: i64) -> BigInt {
        BigInt::from(v)
    }

    #[test]
    fn parses_common_bases() {
        assert_eq!(parse_base("111", 2).unwrap(), big(7));
        assert_eq!(parse_base("213", 4).unwrap(), big(39));
        assert_eq!(parse_base("ff", 16).unwrap(), big(255));
        assert_eq!(parse_base("FF", 16).unwrap(), big(255));
        assert_eq!(parse_base("zz", 36).unwrap(), big(36 * 36 - 1));
    }

    #[test]
    fn separators_do_not_change_value() {
        assert_eq!(parse_base("1_234", 10).unwrap(), parse_base("1234", 10).unwrap());
        assert_eq!(parse_base("_1__0_", 2).unwrap(), big(2));
    }

    #[test]
    fn sign_is_applied_last() {
        let pos = parse_base("ff", 16).unwrap();
        assert_eq!(parse_base("-ff", 16).unwrap(), -pos.clone());
        assert_eq!(parse_base("+ff", 16).unwrap(), pos);
        assert_eq!(parse_base("-0", 10).unwrap(), big(0));
    }

    #[test]
    fn digits_beyond_base_are_rejected() {
        match parse_base("129", 8) {
            Err(SecretError::InvalidCharacter { character, base }) => {
                assert_eq!(character, '9');
                assert_eq!(base, 8);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            parse_base("12.5", 10),
            Err(SecretError::InvalidCharacter { character: '.', .. })
        ));
        assert!(matches!(
            parse_base("1é", 36),
            Err(SecretError::InvalidCharacter { character: 'é', .. })
        ));
        assert!(matches!(
            parse_base("--1", 10),
            Err(SecretError::InvalidCharacter { character: '-', .. })
        ));
    }

    #[test]
    fn empty_input_is_rejected() {
        for text in ["", "-", "+", "___", "-__"] {
            assert!(
                matches!(parse_base(text, 10), Err(SecretError::EmptyValue)),
                "{text:?} should be empty"
            );
        }
    }

    #[test]
    fn base_out_of_range_is_rejected_first() {
        assert!(matches!(parse_base("1", 1), Err(SecretError::InvalidBase(_))));
        assert!(matches!(parse_base("1", 37), Err(SecretError::InvalidBase(_))));
        assert!(matches!(parse_base("", 0), Err(SecretError::InvalidBase(_))));
    }

    #[test]
    fn large_values_do_not_overflow() {
        let text = "f".repeat(64);
        let expected = (BigInt::from(1) << 256) - 1;
        assert_eq!(parse_base(&text, 16).unwrap(), expected);
    }

    proptest! {
        #[test]
        fn matches_positional_value(
            base in MIN_BASE..=MAX_BASE,
            raw in proptest::collection::vec(0u32..36, 1..24),
        ) {
            let digits: Vec<u32> = raw.into_iter().map(|d| d % base).collect();
            let text: String = digits.iter().map(|&d| DIGITS[d as usize] as char).collect();

            let mut expected = BigInt::zero();
            for &d in &digits {
                expected = expected * base + d;
            }
            prop_assert_eq!(parse_base(&text, base).unwrap(), expected.clone());
            prop_assert_eq!(parse_base(&text.to_uppercase(), base).unwrap(), expected.clone());
            prop_assert_eq!(parse_base(&format!("-{text}"), base).unwrap(), -expected);
        }
    }
}

//! Parsing of operator-supplied codes, masks and words.
//!
//! Numbers accept `0x` (hex), `0b` (binary) and plain decimal, with `_`
//! separators ignored. Weight codes additionally accept a bare two-digit
//! binary pair such as `10`, which is how the codes are written everywhere
//! else in this crate.

use crate::error::{Error, Result};
use crate::weight::CODE_MASK;

/// Parse an unsigned integer in hex, binary or decimal notation.
fn parse_radix(text: &str) -> Option<u128> {
    let cleaned: String = text.trim().chars().filter(|c| *c != '_').collect();
    if let Some(hex) = cleaned.strip_prefix("0x").or_else(|| cleaned.strip_prefix("0X")) {
        u128::from_str_radix(hex, 16).ok()
    } else if let Some(bin) = cleaned.strip_prefix("0b").or_else(|| cleaned.strip_prefix("0B")) {
        u128::from_str_radix(bin, 2).ok()
    } else {
        cleaned.parse().ok()
    }
}

/// Parse a 2-bit weight code: `00`, `01`, `10`, `11`, `0b..`, or `0..=3`.
///
/// # Errors
///
/// Returns [`Error::InvalidCode`] for anything outside `0..=3`.
pub fn parse_code(text: &str) -> Result<u8> {
    let t = text.trim();
    let parsed = if t.len() == 2 && t.bytes().all(|b| b == b'0' || b == b'1') {
        u8::from_str_radix(t, 2).ok()
    } else {
        parse_radix(t).and_then(|v| u8::try_from(v).ok())
    };
    parsed
        .filter(|code| *code <= CODE_MASK)
        .ok_or_else(|| Error::InvalidCode(text.to_string()))
}

/// Parse an 8-bit lane mask.
///
/// # Errors
///
/// Returns [`Error::InvalidMask`] for malformed text or values above 255.
pub fn parse_mask(text: &str) -> Result<u8> {
    parse_radix(text)
        .and_then(|v| u8::try_from(v).ok())
        .ok_or_else(|| Error::InvalidMask(text.to_string()))
}

/// Parse an unsigned word that fits in `width` bits.
///
/// # Errors
///
/// Returns [`Error::InvalidWord`] for malformed text or a value wider than
/// `width` bits.
pub fn parse_word(text: &str, width: u32) -> Result<u128> {
    let limit = if width >= 128 {
        u128::MAX
    } else {
        (1u128 << width) - 1
    };
    parse_radix(text)
        .filter(|v| *v <= limit)
        .ok_or_else(|| Error::InvalidWord {
            text: text.to_string(),
            width,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_code() {
        assert_eq!(parse_code("10").ok(), Some(0b10));
        assert_eq!(parse_code("0b11").ok(), Some(0b11));
        assert_eq!(parse_code("1").ok(), Some(0b01));
        assert_eq!(parse_code("3").ok(), Some(0b11));
        assert!(parse_code("4").is_err());
        assert!(parse_code("0b2").is_err());
        assert!(parse_code("").is_err());
    }

    #[test]
    fn test_parse_mask() {
        assert_eq!(parse_mask("0xFF").ok(), Some(0xFF));
        assert_eq!(parse_mask("0b0000_0011").ok(), Some(0x03));
        assert_eq!(parse_mask("128").ok(), Some(0x80));
        assert!(parse_mask("256").is_err());
        assert!(parse_mask("lanes").is_err());
    }

    #[test]
    fn test_parse_word() {
        assert_eq!(parse_word("0xFFFF_FFFF", 32).ok(), Some(0xFFFF_FFFF));
        assert!(parse_word("0x1_0000_0000", 32).is_err());
        assert_eq!(
            parse_word("0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF", 128).ok(),
            Some(u128::MAX)
        );
    }
}

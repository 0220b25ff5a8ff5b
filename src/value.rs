//! @ai:module:intent Running enum value counter and base-prefixed integer literal parsing
//! @ai:module:layer domain
//! @ai:module:public_api EnumValue, LiteralError, parse_signed, parse_unsigned
//! @ai:module:stateless true

use crate::model::BaseType;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// @ai:intent Counter value in the numeric domain selected by the base type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EnumValue {
    Signed(i64),
    Unsigned(u64),
}

impl EnumValue {
    /// @ai:intent Starting counter for a declaration
    /// @ai:post Unsigned(0) for unsigned bases, Signed(0) otherwise
    /// @ai:effects pure
    pub fn zero(base: BaseType) -> Self {
        match base {
            BaseType::Unsigned => EnumValue::Unsigned(0),
            BaseType::Signed | BaseType::String => EnumValue::Signed(0),
        }
    }

    /// @ai:intent Next counter value, None when the 64-bit domain is exhausted
    /// @ai:effects pure
    pub fn checked_increment(self) -> Option<Self> {
        match self {
            EnumValue::Signed(v) => v.checked_add(1).map(EnumValue::Signed),
            EnumValue::Unsigned(v) => v.checked_add(1).map(EnumValue::Unsigned),
        }
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumValue::Signed(v) => write!(f, "{}", v),
            EnumValue::Unsigned(v) => write!(f, "{}", v),
        }
    }
}

/// @ai:intent Why an integer literal was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    #[error("empty literal")]
    Empty,

    #[error("invalid syntax")]
    Syntax,

    #[error("value out of range")]
    OutOfRange,

    #[error("sign not allowed on unsigned literal")]
    Sign,
}

/// @ai:intent Parse a signed integer literal with base detection
/// @ai:example ("0b110") -> Ok(6)
/// @ai:example ("-0x10") -> Ok(-16)
/// @ai:example ("010") -> Ok(8)
/// @ai:effects pure
pub fn parse_signed(text: &str) -> Result<i64, LiteralError> {
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let magnitude = parse_magnitude(body)?;

    if negative {
        if magnitude <= i64::MAX as u64 + 1 {
            Ok((magnitude as i64).wrapping_neg())
        } else {
            Err(LiteralError::OutOfRange)
        }
    } else {
        i64::try_from(magnitude).map_err(|_| LiteralError::OutOfRange)
    }
}

/// @ai:intent Parse an unsigned integer literal with base detection
/// @ai:example ("0o17") -> Ok(15)
/// @ai:example ("-1") -> Err(Sign)
/// @ai:effects pure
pub fn parse_unsigned(text: &str) -> Result<u64, LiteralError> {
    if text.starts_with(['-', '+']) {
        return Err(LiteralError::Sign);
    }
    parse_magnitude(text)
}

/// @ai:intent Parse an unsigned magnitude, detecting 0x/0o/0b/leading-0 bases
/// @ai:effects pure
fn parse_magnitude(text: &str) -> Result<u64, LiteralError> {
    if text.is_empty() {
        return Err(LiteralError::Empty);
    }

    let lower = text.to_ascii_lowercase();
    let (radix, digits, prefixed) = if let Some(rest) = lower.strip_prefix("0x") {
        (16, rest, true)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (2, rest, true)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (8, rest, true)
    } else if lower.len() > 1 && lower.starts_with('0') {
        (8, &lower[1..], true)
    } else {
        (10, lower.as_str(), false)
    };

    let digits = strip_separators(digits, prefixed)?;
    if digits.is_empty() {
        return Err(LiteralError::Syntax);
    }

    u64::from_str_radix(&digits, radix).map_err(|e| match e.kind() {
        std::num::IntErrorKind::PosOverflow => LiteralError::OutOfRange,
        _ => LiteralError::Syntax,
    })
}

/// Underscores must sit between digits, or directly after a base prefix.
fn strip_separators(digits: &str, prefixed: bool) -> Result<String, LiteralError> {
    if !digits.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(LiteralError::Syntax);
    }
    if digits.ends_with('_') || digits.contains("__") || (!prefixed && digits.starts_with('_')) {
        return Err(LiteralError::Syntax);
    }
    Ok(digits.replace('_', ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_signed_bases() {
        assert_eq!(parse_signed("42"), Ok(42));
        assert_eq!(parse_signed("0b110"), Ok(6));
        assert_eq!(parse_signed("0B110"), Ok(6));
        assert_eq!(parse_signed("0x1F"), Ok(31));
        assert_eq!(parse_signed("0o17"), Ok(15));
        assert_eq!(parse_signed("017"), Ok(15));
        assert_eq!(parse_signed("0"), Ok(0));
        assert_eq!(parse_signed("-7"), Ok(-7));
        assert_eq!(parse_signed("+7"), Ok(7));
        assert_eq!(parse_signed("1_000"), Ok(1000));
        assert_eq!(parse_signed("0x_ff"), Ok(255));
    }

    #[test]
    fn test_parse_signed_limits() {
        assert_eq!(parse_signed("-9223372036854775808"), Ok(i64::MIN));
        assert_eq!(parse_signed("9223372036854775807"), Ok(i64::MAX));
        assert_eq!(parse_signed("9223372036854775808"), Err(LiteralError::OutOfRange));
        assert_eq!(parse_signed("-9223372036854775809"), Err(LiteralError::OutOfRange));
    }

    #[test]
    fn test_parse_signed_rejects_garbage() {
        assert_eq!(parse_signed(""), Err(LiteralError::Empty));
        assert_eq!(parse_signed("-"), Err(LiteralError::Empty));
        assert_eq!(parse_signed("0x"), Err(LiteralError::Syntax));
        assert_eq!(parse_signed("08"), Err(LiteralError::Syntax));
        assert_eq!(parse_signed("12ab"), Err(LiteralError::Syntax));
        assert_eq!(parse_signed("--1"), Err(LiteralError::Syntax));
        assert_eq!(parse_signed("1__0"), Err(LiteralError::Syntax));
        assert_eq!(parse_signed("_10"), Err(LiteralError::Syntax));
        assert_eq!(parse_signed("10_"), Err(LiteralError::Syntax));
    }

    #[test]
    fn test_parse_unsigned() {
        assert_eq!(parse_unsigned("18446744073709551615"), Ok(u64::MAX));
        assert_eq!(parse_unsigned("0xff"), Ok(255));
        assert_eq!(parse_unsigned("-1"), Err(LiteralError::Sign));
        assert_eq!(parse_unsigned("+1"), Err(LiteralError::Sign));
        assert_eq!(
            parse_unsigned("18446744073709551616"),
            Err(LiteralError::OutOfRange)
        );
    }

    #[test]
    fn test_counter_increment() {
        assert_eq!(
            EnumValue::zero(BaseType::Unsigned).checked_increment(),
            Some(EnumValue::Unsigned(1))
        );
        assert_eq!(EnumValue::zero(BaseType::String), EnumValue::Signed(0));
        assert_eq!(EnumValue::Signed(i64::MAX).checked_increment(), None);
        assert_eq!(EnumValue::Unsigned(u64::MAX).checked_increment(), None);
    }
}

//! Local checks run before any request leaves the client.

use super::error::ValidationError;

/// Highest discount percent the server accepts.
pub const MAX_DISCOUNT: u8 = 99;

/// Leading base-10 integer of `raw`, ignoring anything after it.
///
/// `" 12abc"` is 12, `"3.9"` is 3, `"abc"` has no value.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        return None;
    }
    let magnitude = rest[..len].bytes().fold(0i64, |acc, digit| {
        acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// An order item quantity: a whole number of at least 1.
pub fn parse_quantity(raw: &str) -> Result<u32, ValidationError> {
    match parse_int_prefix(raw) {
        Some(value) if value >= 1 => u32::try_from(value)
            .map_err(|_| ValidationError::new("quantity", "Quantity is too large")),
        _ => Err(ValidationError::new("quantity", "Quantity must be >= 1")),
    }
}

/// A discount percent. Never rejected: junk and negatives become 0, anything
/// above [`MAX_DISCOUNT`] becomes [`MAX_DISCOUNT`].
pub fn clamp_discount(raw: &str) -> u8 {
    match parse_int_prefix(raw) {
        Some(value) if value > i64::from(MAX_DISCOUNT) => MAX_DISCOUNT,
        Some(value) if value > 0 => value as u8,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix("42"), Some(42));
        assert_eq!(parse_int_prefix("  7 items"), Some(7));
        assert_eq!(parse_int_prefix("3.9"), Some(3));
        assert_eq!(parse_int_prefix("-5"), Some(-5));
        assert_eq!(parse_int_prefix("+8"), Some(8));
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix("-"), None);
    }

    #[test]
    fn test_quantity_rules() {
        assert_eq!(parse_quantity("1").unwrap(), 1);
        assert_eq!(parse_quantity("12").unwrap(), 12);
        assert!(parse_quantity("0").is_err());
        assert!(parse_quantity("-3").is_err());
        assert!(parse_quantity("").is_err());
        assert!(parse_quantity("many").is_err());
        assert!(parse_quantity("99999999999").is_err());

        let err = parse_quantity("0").unwrap_err();
        assert_eq!(err.field, "quantity");
        assert_eq!(err.to_string(), "Quantity must be >= 1");
    }

    #[test]
    fn test_discount_is_clamped() {
        assert_eq!(clamp_discount("150"), 99);
        assert_eq!(clamp_discount("-5"), 0);
        assert_eq!(clamp_discount("99"), 99);
        assert_eq!(clamp_discount("0"), 0);
        assert_eq!(clamp_discount("15"), 15);
        assert_eq!(clamp_discount("abc"), 0);
        assert_eq!(clamp_discount(""), 0);
    }
}

// ============================================================================
// Amount Input Normalizer
// Turns the live value of an amount field into its canonical decimal string
// ============================================================================

use super::errors::{AmountError, AmountResult};

/// Maximum number of digits kept in the integer part.
pub const MAX_INTEGER_DIGITS: usize = 10;

/// Maximum number of digits kept across integer and fractional parts.
pub const MAX_TOTAL_DIGITS: usize = 15;

/// Longest normalized amount in bytes (every digit plus one dot).
pub const MAX_AMOUNT_LEN: usize = MAX_TOTAL_DIGITS + 1;

/// Normalize the full current value of an amount field after an edit.
///
/// Returns the canonical string the field should adopt. Oversized integer
/// or fractional parts are truncated, never rejected. The only failure is
/// [`AmountError::InvalidFormat`], in which case the caller keeps the
/// previous value.
///
/// # Examples
/// ```
/// use swap_amount::numeric::{normalize_amount, AmountError};
///
/// assert_eq!(normalize_amount("007").unwrap(), "7");
/// assert_eq!(normalize_amount("00.5").unwrap(), "0.5");
/// assert_eq!(normalize_amount(".").unwrap(), ".");
/// assert_eq!(normalize_amount("12a.3"), Err(AmountError::InvalidFormat));
/// ```
pub fn normalize_amount(raw: &str) -> AmountResult<String> {
    // Transient states: cleared field, or a dot typed first
    if raw.is_empty() || raw == "." {
        return Ok(raw.to_string());
    }

    let collapsed = collapse_leading_zeros(raw);
    if !is_decimal_shape(collapsed) {
        tracing::debug!(raw, "rejected amount input");
        return Err(AmountError::InvalidFormat);
    }

    let (integer, fraction) = match collapsed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (collapsed, None),
    };
    let has_dot = fraction.is_some();

    let integer = truncate(integer, MAX_INTEGER_DIGITS);

    // An empty integer part before a dot renders as "0", and that zero
    // counts against the digit budget so the output normalizes to itself.
    let integer = if integer.is_empty() && has_dot {
        "0"
    } else {
        integer
    };

    let available = MAX_TOTAL_DIGITS.saturating_sub(integer.len());
    let fraction = truncate(fraction.unwrap_or(""), available);
    debug_assert!(integer.len() + fraction.len() <= MAX_TOTAL_DIGITS);

    if has_dot || !fraction.is_empty() {
        Ok(format!("{integer}.{fraction}"))
    } else {
        Ok(integer.to_string())
    }
}

/// Length of the integer part of `raw` after leading-zero collapse.
///
/// Input collaborators compare this against [`MAX_INTEGER_DIGITS`] to warn
/// the user before [`normalize_amount`] silently truncates. Returns `None`
/// when the input would be rejected.
pub fn integer_part_len(raw: &str) -> Option<usize> {
    let collapsed = collapse_leading_zeros(raw);
    if !is_decimal_shape(collapsed) {
        return None;
    }
    let integer = collapsed.split_once('.').map_or(collapsed, |(i, _)| i);
    Some(integer.len())
}

/// Whether the integer part of `raw` is longer than the normalizer keeps.
#[inline]
pub fn exceeds_integer_limit(raw: &str) -> bool {
    integer_part_len(raw).is_some_and(|len| len > MAX_INTEGER_DIGITS)
}

/// Strip redundant leading zeros unless the zero directly precedes the dot.
#[inline]
fn collapse_leading_zeros(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' && bytes[1] != b'.' {
        raw.trim_start_matches('0')
    } else {
        raw
    }
}

/// `digits* .? digits*` over ASCII only.
pub(crate) fn is_decimal_shape(s: &str) -> bool {
    let mut seen_dot = false;
    for b in s.bytes() {
        match b {
            b'0'..=b'9' => {}
            b'.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    true
}

/// Keep the leftmost `max` bytes. Only called on validated ASCII.
#[inline]
fn truncate(s: &str, max: usize) -> &str {
    &s[..s.len().min(max)]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn norm(raw: &str) -> String {
        normalize_amount(raw).unwrap()
    }

    fn split_digits(s: &str) -> (usize, usize) {
        match s.split_once('.') {
            Some((i, f)) => (i.len(), f.len()),
            None => (s.len(), 0),
        }
    }

    #[test]
    fn test_transient_states_pass_through() {
        assert_eq!(norm(""), "");
        assert_eq!(norm("."), ".");
    }

    #[test]
    fn test_leading_zero_collapse() {
        assert_eq!(norm("007"), "7");
        assert_eq!(norm("0123"), "123");
        assert_eq!(norm("00.5"), "0.5");
        assert_eq!(norm("000000000000123"), "123");
        // All zeros collapse to an empty field
        assert_eq!(norm("00"), "");
    }

    #[test]
    fn test_zero_before_dot_is_kept() {
        assert_eq!(norm("0"), "0");
        assert_eq!(norm("0."), "0.");
        assert_eq!(norm("0.0"), "0.0");
        assert_eq!(norm("0.05"), "0.05");
    }

    #[test]
    fn test_leading_dot_gets_zero_integer_part() {
        assert_eq!(norm(".5"), "0.5");
        assert_eq!(norm(".05"), "0.05");
    }

    #[test]
    fn test_trailing_dot_is_kept() {
        assert_eq!(norm("5."), "5.");
        assert_eq!(norm("12."), "12.");
    }

    #[test]
    fn test_rejects_invalid_characters() {
        assert_eq!(normalize_amount("12a.3"), Err(AmountError::InvalidFormat));
        assert_eq!(normalize_amount("1.2.3"), Err(AmountError::InvalidFormat));
        assert_eq!(normalize_amount(".."), Err(AmountError::InvalidFormat));
        assert_eq!(normalize_amount("-1"), Err(AmountError::InvalidFormat));
        assert_eq!(normalize_amount("1e5"), Err(AmountError::InvalidFormat));
        assert_eq!(normalize_amount(" 1"), Err(AmountError::InvalidFormat));
        assert_eq!(normalize_amount("1,000"), Err(AmountError::InvalidFormat));
        assert_eq!(normalize_amount("0a"), Err(AmountError::InvalidFormat));
        // Non-ASCII digits are not digits here
        assert_eq!(normalize_amount("١٢"), Err(AmountError::InvalidFormat));
    }

    #[test]
    fn test_integer_part_truncated_to_ten_digits() {
        assert_eq!(norm("12345678901.23"), "1234567890.23");
        assert_eq!(norm("99999999999999999"), "9999999999");
        assert_eq!(norm("123456789012."), "1234567890.");
    }

    #[test]
    fn test_fraction_truncated_to_total_budget() {
        // 10 integer digits leave 5 for the fraction
        assert_eq!(norm("1234567890.123456789"), "1234567890.12345");
        // 3 integer digits leave 12
        assert_eq!(norm("123.4567890123456789"), "123.456789012345");
        // The rendered zero counts as one digit
        assert_eq!(norm(".123456789012345678"), "0.12345678901234");
        assert_eq!(norm("0.123456789012345678"), "0.12345678901234");
    }

    #[test]
    fn test_integer_part_len() {
        assert_eq!(integer_part_len("12345678901.5"), Some(11));
        assert_eq!(integer_part_len("000123"), Some(3));
        assert_eq!(integer_part_len(".5"), Some(0));
        assert_eq!(integer_part_len("12a"), None);
        assert!(exceeds_integer_limit("12345678901"));
        assert!(!exceeds_integer_limit("1234567890"));
        assert!(!exceeds_integer_limit("00000000001"));
    }

    proptest! {
        #[test]
        fn prop_idempotent(raw in "[0-9.]{0,32}") {
            if let Ok(once) = normalize_amount(&raw) {
                prop_assert_eq!(normalize_amount(&once), Ok(once.clone()));
            }
        }

        #[test]
        fn prop_output_has_decimal_shape(raw in "\\PC{0,24}") {
            if let Ok(out) = normalize_amount(&raw) {
                prop_assert!(is_decimal_shape(&out));
                prop_assert!(out.len() <= MAX_AMOUNT_LEN);
            }
        }

        #[test]
        fn prop_digit_caps(raw in "[0-9]{0,40}(\\.[0-9]{0,40})?") {
            let out = normalize_amount(&raw).unwrap();
            let (int_len, frac_len) = split_digits(&out);
            prop_assert!(int_len <= MAX_INTEGER_DIGITS);
            prop_assert!(int_len + frac_len <= MAX_TOTAL_DIGITS);
        }

        #[test]
        fn prop_no_spurious_leading_zero(raw in "0{1,4}[1-9][0-9]{0,6}") {
            let out = normalize_amount(&raw).unwrap();
            prop_assert!(!out.starts_with('0'));
        }

        #[test]
        fn prop_rejects_letters(prefix in "[0-9]{0,5}", letter in "[a-zA-Z]", suffix in "[0-9]{0,5}") {
            let raw = format!("{prefix}{letter}{suffix}");
            prop_assert_eq!(normalize_amount(&raw), Err(AmountError::InvalidFormat));
        }
    }
}

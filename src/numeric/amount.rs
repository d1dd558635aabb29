// ============================================================================
// Decimal Amount
// Normalized, fixed-capacity amount string as typed by the user
// ============================================================================

use super::errors::{AmountError, AmountResult};
use super::normalize::{normalize_amount, MAX_AMOUNT_LEN};
use arrayvec::ArrayString;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A non-negative decimal amount in canonical, partially-typed form.
///
/// Only constructed through the normalizer, so the contents always match
/// `digits* .? digits*` with at most 10 integer digits and 15 digits in
/// total. Transient states (`""` and `"."`) are valid values.
///
/// Stored inline; the type is `Copy`.
///
/// # Example
/// ```
/// use swap_amount::numeric::DecimalAmount;
///
/// let amount: DecimalAmount = "0012.50".parse().unwrap();
/// assert_eq!(amount.as_str(), "12.50");
/// assert_eq!(amount.integer_digits(), "12");
/// assert_eq!(amount.to_f64(), 12.5);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DecimalAmount(ArrayString<MAX_AMOUNT_LEN>);

impl DecimalAmount {
    /// The cleared field.
    pub const EMPTY: Self = Self(ArrayString::new_const());

    /// Normalize `raw` and wrap the result.
    ///
    /// # Errors
    /// Returns `InvalidFormat` if `raw` is not digits with at most one dot.
    pub fn parse(raw: &str) -> AmountResult<Self> {
        let normalized = normalize_amount(raw)?;
        ArrayString::from(&normalized)
            .map(Self)
            .map_err(|_| AmountError::InvalidFormat)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The canonical string.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Digits before the dot (may be empty).
    #[inline]
    pub fn integer_digits(&self) -> &str {
        self.split().0
    }

    /// Digits after the dot (empty when there is no dot).
    #[inline]
    pub fn fraction_digits(&self) -> &str {
        self.split().1
    }

    /// Total number of digits, ignoring the dot.
    #[inline]
    pub fn digit_count(&self) -> usize {
        let (integer, fraction) = self.split();
        integer.len() + fraction.len()
    }

    /// Check if the field is cleared.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if the value is a mid-typing state with no digits (`""` or `"."`).
    #[inline]
    pub fn is_transient(&self) -> bool {
        self.digit_count() == 0
    }

    /// Check if every digit is zero, including transient states.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.bytes().all(|b| b == b'0' || b == b'.')
    }

    /// Check if the amount is strictly greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.is_zero()
    }

    #[inline]
    fn split(&self) -> (&str, &str) {
        self.0.split_once('.').unwrap_or((self.0.as_str(), ""))
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Numeric value for quote computation; transient states read as zero.
    pub fn to_f64(&self) -> f64 {
        if self.is_transient() {
            return 0.0;
        }
        // A trailing dot ("5.") parses once the dot is dropped
        self.0
            .trim_end_matches('.')
            .parse::<f64>()
            .unwrap_or(0.0)
    }

    /// Exact decimal value; transient states read as zero.
    ///
    /// Fifteen digits always fit in `Decimal`'s 96-bit mantissa.
    pub fn to_decimal(&self) -> Decimal {
        let (integer, fraction) = self.split();
        if integer.is_empty() && fraction.is_empty() {
            return Decimal::ZERO;
        }
        let digits: String = integer.chars().chain(fraction.chars()).collect();
        let mantissa = digits.parse::<i64>().unwrap_or(0);
        Decimal::new(mantissa, fraction.len() as u32)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl FromStr for DecimalAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for DecimalAmount {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for DecimalAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecimalAmount({:?})", self.as_str())
    }
}

impl fmt::Display for DecimalAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Serde (as a JSON string, re-normalized on the way in)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for DecimalAmount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DecimalAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(D::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(raw: &str) -> DecimalAmount {
        raw.parse().unwrap()
    }

    #[test]
    fn test_parse_normalizes() {
        assert_eq!(amount("007").as_str(), "7");
        assert_eq!(amount(".5").as_str(), "0.5");
        assert_eq!(amount("12345678901.23").as_str(), "1234567890.23");
    }

    #[test]
    fn test_parse_invalid() {
        let result: Result<DecimalAmount, _> = "12a.3".parse();
        assert_eq!(result, Err(AmountError::InvalidFormat));
    }

    #[test]
    fn test_parts() {
        let x = amount("123.456");
        assert_eq!(x.integer_digits(), "123");
        assert_eq!(x.fraction_digits(), "456");
        assert_eq!(x.digit_count(), 6);

        let y = amount("42");
        assert_eq!(y.integer_digits(), "42");
        assert_eq!(y.fraction_digits(), "");
    }

    #[test]
    fn test_transient_states() {
        assert!(DecimalAmount::EMPTY.is_empty());
        assert!(DecimalAmount::EMPTY.is_transient());
        assert!(amount(".").is_transient());
        assert!(!amount("0").is_transient());
        assert_eq!(amount(".").to_f64(), 0.0);
        assert_eq!(amount(".").to_decimal(), Decimal::ZERO);
        assert_eq!(DecimalAmount::default(), DecimalAmount::EMPTY);
    }

    #[test]
    fn test_zero_detection() {
        assert!(amount("0").is_zero());
        assert!(amount("0.000").is_zero());
        assert!(amount("").is_zero());
        assert!(amount("0.001").is_positive());
        assert!(amount("5.").is_positive());
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(amount("12.5").to_f64(), 12.5);
        assert_eq!(amount("5.").to_f64(), 5.0);
        assert_eq!(amount("0.25").to_f64(), 0.25);
    }

    #[test]
    fn test_to_decimal() {
        assert_eq!(amount("123.45").to_decimal(), Decimal::new(12345, 2));
        assert_eq!(amount("5.").to_decimal(), Decimal::new(5, 0));
        assert_eq!(amount("0.5").to_decimal().to_string(), "0.5");
        // Fifteen digits fit
        let big = amount("9999999999.99999");
        assert_eq!(big.to_decimal(), Decimal::new(999_999_999_999_999, 5));
    }

    #[test]
    fn test_display_and_debug() {
        let x = amount("1.50");
        assert_eq!(x.to_string(), "1.50");
        assert_eq!(format!("{:?}", x), "DecimalAmount(\"1.50\")");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_string() {
        let x = amount("007.5");
        assert_eq!(serde_json::to_string(&x).unwrap(), "\"7.5\"");

        let y: DecimalAmount = serde_json::from_str("\".25\"").unwrap();
        assert_eq!(y.as_str(), "0.25");

        assert!(serde_json::from_str::<DecimalAmount>("\"1a\"").is_err());
    }
}

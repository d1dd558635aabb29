// ============================================================================
// Amount Errors
// Error types for amount normalization and display formatting
// ============================================================================

use std::fmt;

/// Errors that can occur while normalizing or formatting an amount.
///
/// Digit-cap overruns are not errors: the normalizer truncates them in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmountError {
    /// Input contains characters other than ASCII digits and a single dot
    InvalidFormat,
    /// Value to format is below zero
    NegativeValue,
    /// Value to format is NaN or infinite
    NonFiniteValue,
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::InvalidFormat => write!(
                f,
                "invalid format: only digits and a single decimal point are allowed"
            ),
            AmountError::NegativeValue => write!(f, "negative value: amounts cannot be below zero"),
            AmountError::NonFiniteValue => write!(f, "non-finite value: NaN or infinity"),
        }
    }
}

impl std::error::Error for AmountError {}

/// Result type alias for amount operations
pub type AmountResult<T> = Result<T, AmountError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            AmountError::InvalidFormat.to_string(),
            "invalid format: only digits and a single decimal point are allowed"
        );
        assert_eq!(
            AmountError::NonFiniteValue.to_string(),
            "non-finite value: NaN or infinity"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(AmountError::InvalidFormat, AmountError::InvalidFormat);
        assert_ne!(AmountError::NegativeValue, AmountError::NonFiniteValue);
    }
}

// ============================================================================
// Amount Display Formatter
// Renders computed amounts as short, human-readable decimal strings
// ============================================================================

use super::errors::{AmountError, AmountResult};
use rust_decimal::{Decimal, RoundingStrategy};

/// Rendering of an exact zero, independent of the requested precision.
pub const ZERO_PLACEHOLDER: &str = "0.00";

/// Decimal places offered to the user as a display setting.
pub const DECIMAL_PLACE_CHOICES: [u32; 5] = [2, 4, 6, 8, 10];

/// Format a computed amount for display.
///
/// Rounds to `decimal_places` (half away from zero), then strips trailing
/// fractional zeros and a dangling dot. An exact zero renders as
/// [`ZERO_PLACEHOLDER`]. Negative or non-finite input is a caller bug; it is
/// logged and rendered as the zero placeholder.
///
/// # Examples
/// ```
/// use swap_amount::numeric::format_received_amount;
///
/// assert_eq!(format_received_amount(0.0, 4), "0.00");
/// assert_eq!(format_received_amount(1.0, 6), "1");
/// assert_eq!(format_received_amount(1.234567, 4), "1.2346");
/// ```
pub fn format_received_amount(value: f64, decimal_places: u32) -> String {
    match try_format_amount(value, decimal_places) {
        Ok(formatted) => formatted,
        Err(err) => {
            tracing::warn!(value, decimal_places, %err, "cannot format amount");
            ZERO_PLACEHOLDER.to_string()
        }
    }
}

/// Checked variant of [`format_received_amount`].
///
/// # Errors
/// - `NonFiniteValue` for NaN or infinity
/// - `NegativeValue` for values below zero
pub fn try_format_amount(value: f64, decimal_places: u32) -> AmountResult<String> {
    if !value.is_finite() {
        return Err(AmountError::NonFiniteValue);
    }
    if value == 0.0 {
        return Ok(ZERO_PLACEHOLDER.to_string());
    }
    if value < 0.0 {
        return Err(AmountError::NegativeValue);
    }

    let fixed = to_fixed(value, decimal_places);
    Ok(trim_fraction_zeros(&fixed).to_string())
}

/// Fixed-point rendering with exactly `decimal_places` fractional digits.
///
/// Rounding is half away from zero on the exact binary value of `value`.
/// `Decimal` handles every value it holds without loss; anything else (too
/// large, too small, or too many fractional digits) goes through the
/// standard formatter, which is exact apart from its tie rule.
pub fn to_fixed(value: f64, decimal_places: u32) -> String {
    let fraction_digits = exact_fraction_digits(value);
    let lossless = Decimal::from_f64_retain(value)
        .filter(|exact| exact.normalize().scale() == fraction_digits);

    match lossless {
        Some(exact) => {
            let rounded =
                exact.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
            pad_fraction(rounded.to_string(), decimal_places)
        }
        // The last digit of a binary fraction is always 5, so the value sits
        // exactly on a midpoint iff it has one digit more than requested.
        None if fraction_digits.checked_sub(1) == Some(decimal_places) => {
            let exact = format!("{:.*}", fraction_digits as usize, value);
            round_up_last_digit(&exact[..exact.len() - 1])
        }
        None => format!("{:.*}", decimal_places as usize, value),
    }
}

/// Number of fractional decimal digits in the exact expansion of `value`.
fn exact_fraction_digits(value: f64) -> u32 {
    if !value.is_finite() || value.fract() == 0.0 {
        return 0;
    }
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1 << 52), biased - 1075)
    };
    // value = mantissa * 2^exponent, and 2^-k needs exactly k decimals
    (-(exponent + mantissa.trailing_zeros() as i32)).max(0) as u32
}

/// Right-pad the fraction of `s` with zeros up to `decimal_places`.
fn pad_fraction(mut s: String, decimal_places: u32) -> String {
    let current = s.split_once('.').map_or(0, |(_, frac)| frac.len());
    let places = decimal_places as usize;
    if places > current {
        if current == 0 {
            s.push('.');
        }
        s.extend(std::iter::repeat('0').take(places - current));
    }
    s
}

/// Add one unit in the last place of a decimal string, carrying left.
fn round_up_last_digit(s: &str) -> String {
    let kept = s.strip_suffix('.').unwrap_or(s);
    let mut digits: Vec<char> = kept.chars().collect();
    let mut carry = true;
    for digit in digits.iter_mut().rev() {
        match *digit {
            '9' => *digit = '0',
            '0'..='8' => {
                *digit = char::from(*digit as u8 + 1);
                carry = false;
                break;
            }
            _ => {}
        }
    }
    if carry {
        let at = usize::from(digits.first() == Some(&'-'));
        digits.insert(at, '1');
    }
    digits.into_iter().collect()
}

/// Strip trailing zeros from the fractional part, then a dangling dot.
/// Integer-only strings are returned unchanged.
#[inline]
pub fn trim_fraction_zeros(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0');
    trimmed.strip_suffix('.').unwrap_or(trimmed)
}

// ============================================================================
// Tests
// ============================================================================

// ============================================================================
// Numeric Module
// Amount normalization and display formatting
// ============================================================================
//
// This module provides:
// - normalize_amount: keystroke-level input to canonical decimal string
// - format_received_amount: computed f64 to minimal display string
// - DecimalAmount: normalized amount value type
// - AmountError: Error types for both directions
//
// Design principles:
// - Pure functions, no shared state
// - Digit caps truncate, only malformed characters reject
// - No panics on user input

mod amount;
mod display;
mod errors;
mod normalize;

pub use amount::DecimalAmount;
pub use display::{
    format_received_amount, to_fixed, trim_fraction_zeros, try_format_amount,
    DECIMAL_PLACE_CHOICES, ZERO_PLACEHOLDER,
};
pub use errors::{AmountError, AmountResult};
pub use normalize::{
    exceeds_integer_limit, integer_part_len, normalize_amount, MAX_AMOUNT_LEN,
    MAX_INTEGER_DIGITS, MAX_TOTAL_DIGITS,
};

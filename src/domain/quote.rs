// ============================================================================
// Quote Domain Model
// Conversion between two coins and transfer eligibility
// ============================================================================

use super::coin::Coin;
use crate::numeric::{to_fixed, DecimalAmount};
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fractional digits of the displayed conversion rate.
pub const RATE_DECIMALS: u32 = 6;

/// Fractional digits of the USD comparison value.
pub const USD_DECIMALS: u32 = 2;

/// Amount of `receive` obtained for `amount` of `pay`.
///
/// Zero when either coin is missing or the amount is not positive.
pub fn received_amount(amount: f64, pay: Option<&Coin>, receive: Option<&Coin>) -> f64 {
    match (pay, receive) {
        (Some(pay), Some(receive)) if amount > 0.0 => amount * pay.price_usd / receive.price_usd,
        _ => 0.0,
    }
}

/// Units of `receive` per unit of `pay`, fixed to six decimals.
pub fn conversion_rate(pay: Option<&Coin>, receive: Option<&Coin>) -> String {
    match (pay, receive) {
        (Some(pay), Some(receive)) => {
            let rate = pay.price_usd / receive.price_usd;
            if rate.is_finite() {
                to_fixed(rate, RATE_DECIMALS)
            } else {
                to_fixed(0.0, RATE_DECIMALS)
            }
        }
        _ => to_fixed(0.0, RATE_DECIMALS),
    }
}

/// USD value of `amount` of `coin`, fixed to two decimals.
pub fn usd_value(amount: f64, coin: Option<&Coin>) -> String {
    match coin {
        Some(coin) if amount > 0.0 => to_fixed(amount * coin.price_usd, USD_DECIMALS),
        _ => to_fixed(0.0, USD_DECIMALS),
    }
}

// ============================================================================
// Transfer Check
// ============================================================================

/// Whether a transfer may proceed, and why not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TransferCheck {
    /// Transfer can be confirmed
    Ready,
    /// Amount is zero or not yet typed
    AmountNotPositive,
    /// No pay coin selected
    NoCoinSelected,
    /// Amount exceeds the pay balance while the balance lock is on
    InsufficientBalance,
}

impl TransferCheck {
    /// Evaluate an amount against the pay coin's balance.
    ///
    /// The zero check runs first; the balance check only applies when
    /// `enforce_balance` is set, i.e. while the balance lock is on
    /// ("Locked: Max balance enforced"). Note the polarity: blocking on
    /// `!is_locked && exceeds` would enforce the balance only when unlocked.
    ///
    /// The amount is compared exactly against the balance; a balance that
    /// `Decimal` cannot represent never blocks.
    pub fn evaluate(amount: DecimalAmount, pay: Option<&Coin>, enforce_balance: bool) -> Self {
        if !amount.is_positive() {
            return TransferCheck::AmountNotPositive;
        }
        let Some(pay) = pay else {
            return TransferCheck::NoCoinSelected;
        };
        let exceeds_balance = Decimal::from_f64_retain(pay.balance)
            .is_some_and(|balance| amount.to_decimal() > balance);
        if enforce_balance && exceeds_balance {
            return TransferCheck::InsufficientBalance;
        }
        TransferCheck::Ready
    }

    #[inline]
    pub fn is_ready(self) -> bool {
        self == TransferCheck::Ready
    }
}

impl fmt::Display for TransferCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferCheck::Ready => write!(f, "Ready to transfer"),
            TransferCheck::AmountNotPositive => write!(f, "Amount must be positive"),
            TransferCheck::NoCoinSelected => write!(f, "Select a coin to pay with"),
            TransferCheck::InsufficientBalance => write!(f, "Insufficient Balance"),
        }
    }
}

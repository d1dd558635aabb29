// ============================================================================
// Amount Field
// Live "amount to pay" value driven by raw edits
// ============================================================================

use crate::interfaces::{EventHandler, SwapEvent};
use crate::numeric::{integer_part_len, DecimalAmount, MAX_INTEGER_DIGITS};
use chrono::Utc;
use std::sync::Arc;

/// Result of applying one edit to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The field adopted the normalized value
    Accepted(DecimalAmount),
    /// The field adopted the value after cutting an oversized integer part
    Truncated(DecimalAmount),
    /// Invalid characters; the field kept its previous value
    Rejected,
}

impl EditOutcome {
    /// The adopted value, if any.
    pub fn value(self) -> Option<DecimalAmount> {
        match self {
            EditOutcome::Accepted(value) | EditOutcome::Truncated(value) => Some(value),
            EditOutcome::Rejected => None,
        }
    }
}

/// Owns the current amount and normalizes every edit.
///
/// The caller passes the complete new text of the input after each
/// keystroke or paste, never a diff.
pub struct AmountField {
    value: DecimalAmount,
    event_handler: Arc<dyn EventHandler>,
}

impl AmountField {
    pub fn new(event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            value: DecimalAmount::EMPTY,
            event_handler,
        }
    }

    /// Apply the field's new raw text.
    pub fn on_edit(&mut self, raw: &str) -> EditOutcome {
        let mut events = Vec::with_capacity(2);

        // Warn before normalizing, which truncates silently
        let oversized = integer_part_len(raw).filter(|&digits| digits > MAX_INTEGER_DIGITS);
        if let Some(digits) = oversized {
            events.push(SwapEvent::IntegerPartTooLong {
                digits,
                limit: MAX_INTEGER_DIGITS,
                timestamp: Utc::now(),
            });
        }

        let outcome = match DecimalAmount::parse(raw) {
            Ok(value) => {
                self.value = value;
                events.push(SwapEvent::InputAccepted {
                    value,
                    timestamp: Utc::now(),
                });
                if oversized.is_some() {
                    EditOutcome::Truncated(value)
                } else {
                    EditOutcome::Accepted(value)
                }
            }
            Err(_) => {
                events.push(SwapEvent::InputRejected {
                    raw: raw.to_string(),
                    timestamp: Utc::now(),
                });
                EditOutcome::Rejected
            }
        };

        self.event_handler.on_events(events);
        outcome
    }

    /// Current value.
    #[inline]
    pub fn value(&self) -> DecimalAmount {
        self.value
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }

    /// Numeric value; empty or bare-dot fields read as zero.
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.value.to_f64()
    }

    pub fn clear(&mut self) {
        self.value = DecimalAmount::EMPTY;
    }
}

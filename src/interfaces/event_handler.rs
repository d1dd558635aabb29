// ============================================================================
// Event Handler Interface
// Defines the contract for handling swap form events
// ============================================================================

use crate::domain::TransferCheck;
use crate::numeric::DecimalAmount;
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the amount field and the swap form.
///
/// The UI layer turns these into toasts, warnings or field updates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SwapEvent {
    /// Field adopted a new normalized value
    InputAccepted {
        value: DecimalAmount,
        timestamp: DateTime<Utc>,
    },

    /// Edit contained invalid characters; field kept its previous value
    InputRejected {
        raw: String,
        timestamp: DateTime<Utc>,
    },

    /// Integer part was longer than the limit and got truncated
    IntegerPartTooLong {
        digits: usize,
        limit: usize,
        timestamp: DateTime<Utc>,
    },

    /// Pay and receive coins exchanged places
    CoinsSwapped {
        pay_symbol: String,
        receive_symbol: String,
        timestamp: DateTime<Utc>,
    },

    /// Transfer request refused
    TransferBlocked {
        reason: TransferCheck,
        timestamp: DateTime<Utc>,
    },

    /// Transfer passed validation and awaits confirmation
    TransferReady {
        amount: DecimalAmount,
        pay_symbol: String,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for processing swap form events
/// Implementations can show toasts, log, record metrics, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a swap event
    fn on_event(&self, event: SwapEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<SwapEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: SwapEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: SwapEvent) {
        match &event {
            SwapEvent::IntegerPartTooLong { digits, limit, .. } => {
                tracing::warn!(digits, limit, "integer part - max {} digits", limit);
            }
            _ => tracing::debug!("Swap form event: {:?}", event),
        }
    }
}

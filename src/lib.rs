// ============================================================================
// Swap Amount Library
// Amount normalization, display formatting and quote logic for a swap form
// ============================================================================

//! # Swap Amount
//!
//! The logic behind a coin-swap form: turning keystrokes into canonical
//! amounts, rendering converted amounts, and the small amount of state that
//! ties a pay coin, a receive coin and an amount together.
//!
//! ## Features
//!
//! - **Input normalization** that never blocks typing: digit caps truncate,
//!   only malformed characters reject
//! - **Display formatting** with half-away-from-zero rounding and minimal output
//! - **Coin catalog** built from a price feed, shared and refreshable
//! - **Swap form** with default selection, coin swap and transfer checks
//!
//! ## Example
//!
//! ```rust
//! use swap_amount::prelude::*;
//! use std::sync::Arc;
//!
//! let catalog = CoinCatalog::new(vec![
//!     Coin::new("USDC", 1.0, 500.0),
//!     Coin::new("ETH", 2000.0, 0.0),
//! ]);
//!
//! let mut form = create_swap_form(
//!     catalog,
//!     SwapSettings::default(),
//!     Arc::new(NoOpEventHandler),
//! )
//! .unwrap();
//!
//! form.edit_amount("0100");
//! assert_eq!(form.amount().as_str(), "100");
//! assert_eq!(form.received_display(), "0.05");
//! assert_eq!(form.conversion_rate(), "0.000500");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Coin, CoinCatalog, PriceData, SwapSettings, Theme, TransferCheck};
    pub use crate::engine::{create_swap_form, AmountField, EditOutcome, SwapForm, SwapFormBuilder};
    pub use crate::interfaces::{EventHandler, LoggingEventHandler, NoOpEventHandler, SwapEvent};
    pub use crate::numeric::{
        format_received_amount, normalize_amount, AmountError, AmountResult, DecimalAmount,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use chrono::{TimeZone, Utc};
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::sync::Arc;

    #[derive(Default)]
    struct RecordingHandler {
        events: Mutex<Vec<SwapEvent>>,
    }

    impl EventHandler for RecordingHandler {
        fn on_event(&self, event: SwapEvent) {
            self.events.lock().push(event);
        }
    }

    #[test]
    fn test_end_to_end_swap() {
        let date = Utc.with_ymd_and_hms(2023, 8, 29, 7, 10, 40).unwrap();
        let prices = vec![
            PriceData::new("USDC", date, 1.0),
            PriceData::new("ETH", date, 1600.0),
            PriceData::new("ATOM", date, 8.0),
        ];
        let balances = HashMap::from([("USDC".to_string(), 1000.0)]);
        let catalog = CoinCatalog::from_prices(&prices, &balances);

        let handler = Arc::new(RecordingHandler::default());
        let mut form = SwapFormBuilder::new(catalog)
            .decimal_places(4)
            .build(handler.clone())
            .unwrap();

        assert_eq!(form.pay_coin().unwrap().symbol, "usdc");
        assert_eq!(form.receive_coin().unwrap().symbol, "eth");

        // Type "1" then "10" then a stray letter
        form.edit_amount("1");
        form.edit_amount("10");
        assert_eq!(form.edit_amount("10x"), EditOutcome::Rejected);
        assert_eq!(form.amount().as_str(), "10");

        // 10 USDC at 1600 USD/ETH = 0.00625 ETH
        assert_eq!(form.received_display(), "0.0063");

        assert_eq!(form.request_transfer(), TransferCheck::Ready);

        let events = handler.events.lock();
        assert!(events
            .iter()
            .any(|e| matches!(e, SwapEvent::InputRejected { raw, .. } if raw == "10x")));
        assert!(events
            .iter()
            .any(|e| matches!(e, SwapEvent::TransferReady { pay_symbol, .. } if pay_symbol == "usdc")));
    }
}

// ============================================================================
// Swap Form
// Pay/receive selection, amount entry and the derived quote
// ============================================================================

use super::amount_field::{AmountField, EditOutcome};
use crate::domain::{
    conversion_rate, received_amount, usd_value, Coin, CoinCatalog, SwapSettings, TransferCheck,
};
use crate::interfaces::{EventHandler, SwapEvent};
use crate::numeric::{format_received_amount, DecimalAmount};
use chrono::Utc;
use std::sync::Arc;

/// State behind a swap form: two coin selections and the pay amount.
///
/// Every derived value (receive amount, rate, USD value, transfer check)
/// is recomputed from the current state on request.
pub struct SwapForm {
    catalog: CoinCatalog,
    pay: Option<Coin>,
    receive: Option<Coin>,
    amount: AmountField,
    settings: SwapSettings,
    event_handler: Arc<dyn EventHandler>,
}

impl SwapForm {
    /// Create a form with nothing selected
    pub fn new(
        catalog: CoinCatalog,
        settings: SwapSettings,
        event_handler: Arc<dyn EventHandler>,
    ) -> Self {
        Self {
            catalog,
            pay: None,
            receive: None,
            amount: AmountField::new(Arc::clone(&event_handler)),
            settings,
            event_handler,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn pay_coin(&self) -> Option<&Coin> {
        self.pay.as_ref()
    }

    pub fn receive_coin(&self) -> Option<&Coin> {
        self.receive.as_ref()
    }

    pub fn amount(&self) -> DecimalAmount {
        self.amount.value()
    }

    pub fn settings(&self) -> &SwapSettings {
        &self.settings
    }

    pub fn catalog(&self) -> &CoinCatalog {
        &self.catalog
    }

    /// Replace the settings after validating them.
    pub fn apply_settings(&mut self, settings: SwapSettings) -> Result<(), String> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Feed the pay field's new raw text.
    pub fn edit_amount(&mut self, raw: &str) -> EditOutcome {
        self.amount.on_edit(raw)
    }

    /// Select the pay coin; only coins with a balance qualify.
    pub fn select_pay(&mut self, symbol: &str) -> bool {
        match self.catalog.find(symbol).filter(Coin::has_balance) {
            Some(coin) => {
                self.pay = Some(coin);
                true
            }
            None => false,
        }
    }

    /// Select the receive coin from the whole catalog.
    pub fn select_receive(&mut self, symbol: &str) -> bool {
        match self.catalog.find(symbol) {
            Some(coin) => {
                self.receive = Some(coin);
                true
            }
            None => false,
        }
    }

    /// Exchange pay and receive coins. No-op unless both are selected.
    pub fn swap_coins(&mut self) -> bool {
        let (Some(pay), Some(receive)) = (&self.pay, &self.receive) else {
            return false;
        };

        self.event_handler.on_event(SwapEvent::CoinsSwapped {
            pay_symbol: receive.symbol.clone(),
            receive_symbol: pay.symbol.clone(),
            timestamp: Utc::now(),
        });
        std::mem::swap(&mut self.pay, &mut self.receive);
        true
    }

    /// Re-resolve selections after the catalog was refreshed.
    ///
    /// A selection survives when its symbol is still listed (and, for the
    /// pay side, still has a balance). Otherwise the pay side falls back to
    /// the first payable coin and the receive side to the first coin that
    /// differs from the pay coin.
    pub fn refresh_selection(&mut self) {
        if let Some(previous) = self.pay.take() {
            let payable = self.catalog.payable();
            self.pay = payable
                .iter()
                .find(|coin| coin.is_symbol(&previous.symbol))
                .or_else(|| payable.first())
                .cloned();
        }

        if let Some(previous) = self.receive.take() {
            let all = self.catalog.all();
            let pay_symbol = self.pay.as_ref().map(|coin| coin.symbol.as_str());
            self.receive = all
                .iter()
                .find(|coin| coin.is_symbol(&previous.symbol))
                .or_else(|| {
                    all.iter()
                        .find(|coin| pay_symbol.map_or(true, |symbol| !coin.is_symbol(symbol)))
                })
                .cloned();
        }
    }

    // ========================================================================
    // Derived Values
    // ========================================================================

    /// Receive amount for the current input.
    pub fn received_amount(&self) -> f64 {
        received_amount(
            self.amount.to_f64(),
            self.pay.as_ref(),
            self.receive.as_ref(),
        )
    }

    /// Receive amount rendered with the configured decimal places.
    pub fn received_display(&self) -> String {
        format_received_amount(self.received_amount(), self.settings.decimal_places)
    }

    /// Units of the receive coin per pay coin.
    pub fn conversion_rate(&self) -> String {
        conversion_rate(self.pay.as_ref(), self.receive.as_ref())
    }

    /// USD value of the pay amount, when the comparison is enabled.
    pub fn usd_value(&self) -> Option<String> {
        self.settings
            .show_usd_comparison
            .then(|| usd_value(self.amount.to_f64(), self.pay.as_ref()))
    }

    /// Evaluate the transfer without emitting events.
    pub fn check_transfer(&self) -> TransferCheck {
        TransferCheck::evaluate(
            self.amount.value(),
            self.pay.as_ref(),
            self.settings.is_locked,
        )
    }

    /// Validate a transfer request and report the result to the handler.
    pub fn request_transfer(&self) -> TransferCheck {
        let check = self.check_transfer();
        let event = match (check, &self.pay) {
            (TransferCheck::Ready, Some(pay)) => SwapEvent::TransferReady {
                amount: self.amount.value(),
                pay_symbol: pay.symbol.clone(),
                timestamp: Utc::now(),
            },
            _ => SwapEvent::TransferBlocked {
                reason: check,
                timestamp: Utc::now(),
            },
        };
        self.event_handler.on_event(event);
        check
    }
}

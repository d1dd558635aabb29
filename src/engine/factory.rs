// ============================================================================
// Swap Form Factory
// Creates swap forms with default coin selection
// ============================================================================

use crate::domain::{CoinCatalog, SwapSettings, Theme};
use crate::engine::SwapForm;
use crate::interfaces::EventHandler;
use std::sync::Arc;

/// Symbol preferred as the default receive coin.
pub const DEFAULT_RECEIVE_SYMBOL: &str = "eth";

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a swap form with the default pair selected
///
/// Pay defaults to the first coin with a balance. Receive defaults to ETH
/// when listed, else the second payable coin, else the first one.
///
/// # Example
/// ```
/// use swap_amount::prelude::*;
/// use std::sync::Arc;
///
/// let catalog = CoinCatalog::new(vec![
///     Coin::new("USDC", 1.0, 100.0),
///     Coin::new("ETH", 2000.0, 0.0),
/// ]);
/// let form = create_swap_form(catalog, SwapSettings::default(), Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(form.pay_coin().unwrap().symbol, "usdc");
/// assert_eq!(form.receive_coin().unwrap().symbol, "eth");
/// ```
pub fn create_swap_form(
    catalog: CoinCatalog,
    settings: SwapSettings,
    event_handler: Arc<dyn EventHandler>,
) -> Result<SwapForm, String> {
    // Validate configuration first
    settings.validate()?;

    let payable = catalog.payable();
    let mut form = SwapForm::new(catalog, settings, event_handler);

    // No balance anywhere: leave the form unselected
    let Some(first) = payable.first() else {
        tracing::debug!("no payable coins, form created without selection");
        return Ok(form);
    };
    form.select_pay(&first.symbol);

    if !form.select_receive(DEFAULT_RECEIVE_SYMBOL) {
        let fallback = payable.get(1).unwrap_or(first);
        form.select_receive(&fallback.symbol);
    }

    Ok(form)
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating swap forms with fluent API
///
/// # Example
/// ```
/// use swap_amount::prelude::*;
/// use std::sync::Arc;
///
/// let catalog = CoinCatalog::new(vec![Coin::new("ATOM", 8.0, 5.0)]);
/// let form = SwapFormBuilder::new(catalog)
///     .decimal_places(4)
///     .unlocked()
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// assert_eq!(form.settings().decimal_places, 4);
/// ```
pub struct SwapFormBuilder {
    catalog: CoinCatalog,
    settings: SwapSettings,
}

impl SwapFormBuilder {
    /// Create a new builder over the given catalog
    pub fn new(catalog: CoinCatalog) -> Self {
        Self {
            catalog,
            settings: SwapSettings::default(),
        }
    }

    /// Start from previously stored settings
    pub fn with_settings(mut self, settings: SwapSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Set displayed decimal places for the receive amount
    pub fn decimal_places(mut self, places: u32) -> Self {
        self.settings.decimal_places = places;
        self
    }

    /// Enforce the pay balance on transfers (default)
    pub fn locked(mut self) -> Self {
        self.settings.is_locked = true;
        self
    }

    /// Allow transfers above the pay balance
    pub fn unlocked(mut self) -> Self {
        self.settings.is_locked = false;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.settings.theme = theme;
        self
    }

    pub fn show_usd_comparison(mut self, show: bool) -> Self {
        self.settings.show_usd_comparison = show;
        self
    }

    /// Build the swap form
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<SwapForm, String> {
        create_swap_form(self.catalog, self.settings, event_handler)
    }

    /// Get the settings without building (for inspection)
    pub fn get_settings(&self) -> &SwapSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coin;
    use crate::interfaces::NoOpEventHandler;

    fn build(coins: Vec<Coin>) -> SwapForm {
        create_swap_form(
            CoinCatalog::new(coins),
            SwapSettings::default(),
            Arc::new(NoOpEventHandler),
        )
        .unwrap()
    }

    #[test]
    fn test_defaults_to_eth_receive() {
        let form = build(vec![
            Coin::new("USDC", 1.0, 100.0),
            Coin::new("ATOM", 8.0, 3.0),
            Coin::new("ETH", 2000.0, 0.0),
        ]);
        // Sorted by symbol: atom is the first payable coin
        assert_eq!(form.pay_coin().unwrap().symbol, "atom");
        assert_eq!(form.receive_coin().unwrap().symbol, "eth");
    }

    #[test]
    fn test_falls_back_to_second_payable() {
        let form = build(vec![Coin::new("USDC", 1.0, 100.0), Coin::new("ATOM", 8.0, 3.0)]);
        assert_eq!(form.pay_coin().unwrap().symbol, "atom");
        assert_eq!(form.receive_coin().unwrap().symbol, "usdc");
    }

    #[test]
    fn test_single_payable_coin_on_both_sides() {
        let form = build(vec![Coin::new("USDC", 1.0, 100.0), Coin::new("BTC", 26000.0, 0.0)]);
        assert_eq!(form.pay_coin().unwrap().symbol, "usdc");
        assert_eq!(form.receive_coin().unwrap().symbol, "usdc");
    }

    #[test]
    fn test_no_balance_leaves_form_empty() {
        let form = build(vec![Coin::new("ETH", 2000.0, 0.0)]);
        assert!(form.pay_coin().is_none());
        assert!(form.receive_coin().is_none());
    }

    #[test]
    fn test_invalid_settings() {
        let result = SwapFormBuilder::new(CoinCatalog::default())
            .decimal_places(5)
            .build(Arc::new(NoOpEventHandler));
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_pattern() {
        let builder = SwapFormBuilder::new(CoinCatalog::default())
            .with_settings(SwapSettings::default())
            .decimal_places(8)
            .unlocked()
            .locked()
            .theme(Theme::Light)
            .show_usd_comparison(false);

        let settings = builder.get_settings().clone();
        assert_eq!(settings.decimal_places, 8);
        assert!(settings.is_locked);
        assert_eq!(settings.theme, Theme::Light);

        let form = builder.build(Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(form.usd_value(), None);
    }
}

// ============================================================================
// Coin Catalog
// Latest-price coin list shared between a refresher and readers
// ============================================================================

use super::coin::{Coin, PriceData};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Sorted list of coins built from a price feed and a balance sheet.
///
/// Cloning yields another handle to the same list; `refresh` swaps the
/// contents for every handle.
#[derive(Debug, Clone, Default)]
pub struct CoinCatalog {
    coins: Arc<RwLock<Vec<Coin>>>,
}

impl CoinCatalog {
    /// Create a catalog from already-built coins (sorted by symbol).
    pub fn new(mut coins: Vec<Coin>) -> Self {
        coins.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        Self {
            coins: Arc::new(RwLock::new(coins)),
        }
    }

    /// Build from raw feed entries and balances keyed by upper-case currency.
    pub fn from_prices(prices: &[PriceData], balances: &HashMap<String, f64>) -> Self {
        Self::new(build_coins(prices, balances))
    }

    /// Replace the contents with a freshly fetched feed.
    pub fn refresh(&self, prices: &[PriceData], balances: &HashMap<String, f64>) {
        let coins = build_coins(prices, balances);
        tracing::debug!(count = coins.len(), "coin catalog refreshed");
        *self.coins.write() = coins;
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// All coins, selectable as the receive side.
    pub fn all(&self) -> Vec<Coin> {
        self.coins.read().clone()
    }

    /// Coins with a positive balance, selectable as the pay side.
    pub fn payable(&self) -> Vec<Coin> {
        self.coins
            .read()
            .iter()
            .filter(|coin| coin.has_balance())
            .cloned()
            .collect()
    }

    /// Look up a coin by symbol, case-insensitive.
    pub fn find(&self, symbol: &str) -> Option<Coin> {
        self.coins
            .read()
            .iter()
            .find(|coin| coin.is_symbol(symbol))
            .cloned()
    }

    /// Coins whose name or symbol contains `term`, case-insensitive.
    pub fn search(&self, term: &str) -> Vec<Coin> {
        self.coins
            .read()
            .iter()
            .filter(|coin| coin.matches(term))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.coins.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.read().is_empty()
    }
}

/// Keep the newest entry per currency; on equal dates the first one wins.
fn build_coins(prices: &[PriceData], balances: &HashMap<String, f64>) -> Vec<Coin> {
    let mut latest: HashMap<&str, &PriceData> = HashMap::with_capacity(prices.len());
    for entry in prices {
        let newer = latest
            .get(entry.currency.as_str())
            .map_or(true, |existing| entry.date > existing.date);
        if newer {
            latest.insert(entry.currency.as_str(), entry);
        }
    }

    let mut coins: Vec<Coin> = latest
        .into_values()
        .map(|entry| {
            let balance = balances
                .get(&entry.currency.to_uppercase())
                .copied()
                .unwrap_or(0.0);
            Coin::new(&entry.currency, entry.price, balance)
        })
        .collect();

    coins.sort_by(|a, b| a.symbol.cmp(&b.symbol));
    coins
}

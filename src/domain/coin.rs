// ============================================================================
// Coin Domain Model
// ============================================================================

use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const TOKEN_ICON_BASE: &str = "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens";

/// Icon file names whose casing differs from the feed's currency name.
const STAKED_TOKEN_CASINGS: [(&str, &str); 8] = [
    ("RATOM", "rATOM"),
    ("STATOM", "stATOM"),
    ("STDYDX", "stDYDX"),
    ("STDYM", "stDYM"),
    ("STETH", "stETH"),
    ("STEVMOS", "stEVMOS"),
    ("STOSMO", "stOSMO"),
    ("STLUNA", "stLUNA"),
];

// ============================================================================
// Price Feed Entry
// ============================================================================

/// One price observation as delivered by the price feed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PriceData {
    /// Currency name as the feed spells it (e.g. "ETH", "STATOM")
    pub currency: String,

    /// Observation time
    pub date: DateTime<Utc>,

    /// Price in USD
    pub price: f64,
}

impl PriceData {
    pub fn new(currency: impl Into<String>, date: DateTime<Utc>, price: f64) -> Self {
        Self {
            currency: currency.into(),
            date,
            price,
        }
    }
}

// ============================================================================
// Coin
// ============================================================================

/// A swappable token with its latest price and the user's balance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coin {
    /// Lower-case symbol, the lookup key (e.g. "eth")
    pub symbol: String,

    /// Upper-case display name (e.g. "ETH")
    pub name: String,

    /// Price in USD
    pub price_usd: f64,

    /// Icon location
    pub icon_url: String,

    /// User balance in units of this coin
    pub balance: f64,
}

impl Coin {
    /// Build a coin from a feed currency name.
    pub fn new(currency: &str, price_usd: f64, balance: f64) -> Self {
        let name = currency.to_uppercase();
        Self {
            symbol: name.to_lowercase(),
            name,
            price_usd,
            icon_url: token_icon_url(currency),
            balance,
        }
    }

    /// Whether the user holds any of this coin.
    #[inline]
    pub fn has_balance(&self) -> bool {
        self.balance > 0.0
    }

    /// Case-insensitive symbol comparison.
    #[inline]
    pub fn is_symbol(&self, symbol: &str) -> bool {
        self.symbol.eq_ignore_ascii_case(symbol)
    }

    /// Case-insensitive substring match on name or symbol.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.symbol.to_lowercase().contains(&term)
    }
}

/// Icon URL for a feed currency name.
pub fn token_icon_url(currency: &str) -> String {
    let upper = currency.to_uppercase();
    let file_name = STAKED_TOKEN_CASINGS
        .iter()
        .find(|(feed, _)| *feed == upper)
        .map_or(currency, |(_, icon)| *icon);
    format!("{TOKEN_ICON_BASE}/{file_name}.svg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_new() {
        let coin = Coin::new("Eth", 1645.93, 2.5);
        assert_eq!(coin.symbol, "eth");
        assert_eq!(coin.name, "ETH");
        assert!(coin.has_balance());
        assert!(coin.is_symbol("ETH"));
        assert!(!coin.is_symbol("ETHX"));
    }

    #[test]
    fn test_matches() {
        let coin = Coin::new("USDC", 1.0, 0.0);
        assert!(coin.matches("usd"));
        assert!(coin.matches("SDC"));
        assert!(!coin.matches("btc"));
        assert!(!coin.has_balance());
    }

    #[test]
    fn test_icon_url_special_casing() {
        assert_eq!(
            token_icon_url("STATOM"),
            "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens/stATOM.svg"
        );
        assert_eq!(
            token_icon_url("rAtom"),
            "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens/rATOM.svg"
        );
        assert_eq!(
            token_icon_url("ETH"),
            "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens/ETH.svg"
        );
    }
}

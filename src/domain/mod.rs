// ============================================================================
// Domain Models Module
// Coins, the coin catalog, quotes and user settings
// ============================================================================

pub mod catalog;
pub mod coin;
pub mod quote;
pub mod settings;

pub use catalog::CoinCatalog;
pub use coin::{token_icon_url, Coin, PriceData};
pub use quote::{conversion_rate, received_amount, usd_value, TransferCheck};
pub use settings::{SwapSettings, Theme};

// ============================================================================
// Swap Settings
// User preferences that shape display and balance enforcement
// ============================================================================

use crate::numeric::DECIMAL_PLACE_CHOICES;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Theme
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

// ============================================================================
// Settings
// ============================================================================

/// Swap form preferences.
///
/// Serialized field names follow the stored JSON layout
/// (`decimalPlaces`, `isLocked`, `theme`, `showUSDComparison`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SwapSettings {
    /// Fractional digits shown for the receive amount
    pub decimal_places: u32,

    /// When locked, transfers above the pay balance are blocked
    pub is_locked: bool,

    /// Color theme
    pub theme: Theme,

    /// Show the USD value next to the pay amount
    #[cfg_attr(feature = "serde", serde(rename = "showUSDComparison"))]
    pub show_usd_comparison: bool,
}

impl Default for SwapSettings {
    fn default() -> Self {
        Self {
            decimal_places: 6,
            is_locked: true,
            theme: Theme::Dark,
            show_usd_comparison: true,
        }
    }
}

impl SwapSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set displayed decimal places
    pub fn with_decimal_places(mut self, places: u32) -> Self {
        self.decimal_places = places;
        self
    }

    /// Builder method: Set balance lock
    pub fn with_lock(mut self, locked: bool) -> Self {
        self.is_locked = locked;
        self
    }

    /// Builder method: Set theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Builder method: Toggle USD comparison
    pub fn with_usd_comparison(mut self, show: bool) -> Self {
        self.show_usd_comparison = show;
        self
    }

    pub fn toggle_lock(&mut self) {
        self.is_locked = !self.is_locked;
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), String> {
        if !DECIMAL_PLACE_CHOICES.contains(&self.decimal_places) {
            return Err(format!(
                "Decimal places must be one of {:?}, got {}",
                DECIMAL_PLACE_CHOICES, self.decimal_places
            ));
        }

        Ok(())
    }
}

// ============================================================================
// JSON (for callers that persist settings)
// ============================================================================

#[cfg(feature = "serde")]
impl SwapSettings {
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| e.to_string())
    }

    /// Parse stored settings, falling back to defaults when unreadable.
    pub fn from_json_or_default(json: &str) -> Self {
        match serde_json::from_str::<Self>(json) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(%err, "failed to parse settings, using defaults");
                Self::default()
            }
        }
    }
}

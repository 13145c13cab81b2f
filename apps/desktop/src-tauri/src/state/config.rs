//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SABOR_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

/// Application configuration.
///
/// The currency block is fixed to BRL: the core `Money` formatter renders
/// `R$` with pt-BR separators, and the values here let the frontend label
/// inputs consistently with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// App name shown in the window title and about box.
    pub app_name: String,

    /// Currency code (ISO 4217).
    pub currency_code: String,

    /// Currency symbol (for display).
    pub currency_symbol: String,

    /// Number of decimal places for currency.
    pub currency_decimals: u8,

    /// BCP 47 locale tag the formatting follows.
    pub locale: String,

    /// Default number of cards per storefront listing.
    pub page_size: u32,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    fn default() -> Self {
        ConfigState {
            app_name: "Sabor".to_string(),
            currency_code: "BRL".to_string(),
            currency_symbol: "R$".to_string(),
            currency_decimals: 2,
            locale: "pt-BR".to_string(),
            page_size: 20,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SABOR_APP_NAME`: override the app name
    /// - `SABOR_PAGE_SIZE`: override the listing page size
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(app_name) = std::env::var("SABOR_APP_NAME") {
            config.app_name = app_name;
        }

        if let Ok(page_size_str) = std::env::var("SABOR_PAGE_SIZE") {
            if let Ok(page_size) = page_size_str.parse::<u32>() {
                if page_size > 0 {
                    config.page_size = page_size;
                }
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_brl() {
        let config = ConfigState::default();
        assert_eq!(config.currency_code, "BRL");
        assert_eq!(config.currency_symbol, "R$");
        assert_eq!(config.currency_decimals, 2);
        assert_eq!(config.locale, "pt-BR");
        assert_eq!(config.page_size, 20);
    }
}

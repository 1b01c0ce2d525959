//! Application configuration, read once at startup.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Runtime configuration from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the API listens on.
    pub port: u16,
    /// Origin of the marketing site, for CORS.
    pub cors_origin: String,
    /// Reference-currency units per converted unit (MXN per USD).
    pub exchange_rate: Decimal,
}

impl AppConfig {
    /// Read configuration from the environment, falling back to defaults.
    pub fn load() -> Result<Self> {
        let port = match std::env::var("PORT").ok() {
            Some(value) => value.parse::<u16>().context("PORT must be a port number")?,
            None => 8081,
        };

        let cors_origin = std::env::var("CORS_ORIGIN")
            .unwrap_or_else(|_| "https://www.codigolab.mx".to_string());

        let exchange_rate = match std::env::var("EXCHANGE_RATE").ok() {
            Some(value) => value
                .parse::<Decimal>()
                .context("EXCHANGE_RATE must be a decimal number")?,
            None => dec!(17.5),
        };

        Ok(Self {
            port,
            cors_origin,
            exchange_rate,
        })
    }
}

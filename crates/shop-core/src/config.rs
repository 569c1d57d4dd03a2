use anyhow::Context;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Days added to the ship date when an order ships without a delivery date.
    pub estimated_delivery_days: i64,
    /// Shipping fee put on newly created orders.
    pub default_shipping_fee_cents: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            estimated_delivery_days: 3,
            default_shipping_fee_cents: 0,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let estimated_delivery_days = match lookup("ESTIMATED_DELIVERY_DAYS") {
            Some(v) => v
                .trim()
                .parse()
                .with_context(|| format!("invalid ESTIMATED_DELIVERY_DAYS: {v}"))?,
            None => defaults.estimated_delivery_days,
        };
        let default_shipping_fee_cents = match lookup("DEFAULT_SHIPPING_FEE_CENTS") {
            Some(v) => v
                .trim()
                .parse()
                .with_context(|| format!("invalid DEFAULT_SHIPPING_FEE_CENTS: {v}"))?,
            None => defaults.default_shipping_fee_cents,
        };
        if estimated_delivery_days < 0 {
            anyhow::bail!("ESTIMATED_DELIVERY_DAYS must not be negative");
        }
        if default_shipping_fee_cents < 0 {
            anyhow::bail!("DEFAULT_SHIPPING_FEE_CENTS must not be negative");
        }
        Ok(Self {
            estimated_delivery_days,
            default_shipping_fee_cents,
        })
    }

    pub fn estimated_delivery(&self) -> chrono::Duration {
        chrono::Duration::days(self.estimated_delivery_days)
    }
}

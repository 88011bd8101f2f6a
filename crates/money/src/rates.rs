//! Exchange-rate table used by currency conversion.
//!
//! Rates are expressed relative to USD: an amount in currency `C` is
//! normalized to USD by dividing by `rate(C)`.

use std::collections::HashMap;

use household_core::{DomainError, DomainResult};

use crate::currency::Currency;

/// Environment variable holding a JSON rate table, e.g.
/// `{"USD":1.0,"GBP":0.5,"EUR":1.5,"CAN":1.25}`.
pub const RATES_ENV_VAR: &str = "HOUSEHOLD_EXCHANGE_RATES";

/// A complete rate table: one finite, positive rate per supported currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeRates {
    rates: [f64; Currency::ALL.len()],
}

impl ExchangeRates {
    /// The fixed table every `Money::convert` call uses.
    pub const FIXED: ExchangeRates = ExchangeRates {
        rates: [1.0, 0.5, 1.5, 1.25],
    };

    pub fn fixed() -> Self {
        Self::FIXED
    }

    /// Build a table from `(currency, rate)` pairs.
    ///
    /// Later pairs override earlier ones for the same currency.
    pub fn new(pairs: impl IntoIterator<Item = (Currency, f64)>) -> DomainResult<Self> {
        let mut slots = [None; Currency::ALL.len()];
        for (currency, rate) in pairs {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(DomainError::validation(format!(
                    "rate for {currency} must be finite and positive (got {rate})"
                )));
            }
            slots[currency.index()] = Some(rate);
        }

        let mut rates = [0.0; Currency::ALL.len()];
        for currency in Currency::ALL {
            rates[currency.index()] = slots[currency.index()].ok_or_else(|| {
                DomainError::validation(format!("missing rate for {currency}"))
            })?;
        }
        Ok(Self { rates })
    }

    /// Parse a JSON object keyed by currency code.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let table: HashMap<Currency, f64> = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("exchange rates: {e}")))?;
        Self::new(table)
    }

    /// Load the table from [`RATES_ENV_VAR`], falling back to [`Self::FIXED`].
    pub fn from_env() -> Self {
        Self::resolve(std::env::var(RATES_ENV_VAR).ok().as_deref())
    }

    fn resolve(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::FIXED;
        };
        Self::from_json(raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "{RATES_ENV_VAR} rejected; using fixed exchange rates");
            Self::FIXED
        })
    }

    pub fn rate(&self, currency: Currency) -> f64 {
        self.rates[currency.index()]
    }

    /// Convert `amount` between currencies, rounding half away from zero.
    pub fn convert(&self, amount: i64, from: Currency, to: Currency) -> i64 {
        let base = amount as f64 / self.rate(from);
        (base * self.rate(to)).round() as i64
    }
}

impl Default for ExchangeRates {
    fn default() -> Self {
        Self::FIXED
    }
}

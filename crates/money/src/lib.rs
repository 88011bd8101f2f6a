//! Money domain module (currency-aware amounts).
//!
//! Amounts are whole units in one of four supported currencies. Conversion
//! normalizes through USD using a fixed rate table; see [`ExchangeRates`].

pub mod currency;
pub mod money;
pub mod rates;

pub use currency::Currency;
pub use money::Money;
pub use rates::ExchangeRates;

use serde::{Deserialize, Serialize};

use household_core::{DomainResult, ValueObject};

use crate::currency::Currency;
use crate::rates::ExchangeRates;

/// An integer amount in a supported currency (immutable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: i64,
    currency: Currency,
}

impl Money {
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Construct from a textual currency code.
    pub fn try_from_code(amount: i64, code: &str) -> DomainResult<Self> {
        Ok(Self::new(amount, code.parse()?))
    }

    /// Construct from a textual currency code.
    ///
    /// # Panics
    ///
    /// Panics with `InvalidCurrency` when `code` is not supported.
    #[track_caller]
    pub fn from_code(amount: i64, code: &str) -> Self {
        Self::try_from_code(amount, code).unwrap_or_else(|e| e.fatal())
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Convert using the fixed rate table.
    pub fn convert(&self, target: Currency) -> Money {
        self.convert_with(target, &ExchangeRates::FIXED)
    }

    /// Convert against an arbitrary rate table.
    ///
    /// Converting to the same currency returns `self` unchanged.
    pub fn convert_with(&self, target: Currency, rates: &ExchangeRates) -> Money {
        if self.currency == target {
            return *self;
        }
        let amount = rates.convert(self.amount, self.currency, target);
        tracing::trace!(from = %self, to = %target, amount, "converted money");
        Money::new(amount, target)
    }

    pub fn try_convert_code(&self, code: &str) -> DomainResult<Money> {
        Ok(self.convert(code.parse()?))
    }

    /// # Panics
    ///
    /// Panics with `InvalidCurrency` when `code` is not supported.
    #[track_caller]
    pub fn convert_code(&self, code: &str) -> Money {
        self.try_convert_code(code).unwrap_or_else(|e| e.fatal())
    }

    /// Sum in `other`'s currency.
    ///
    /// The result takes the currency of the argument, so `a.add(&b)` and
    /// `b.add(&a)` differ in currency and may differ in rounding.
    pub fn add(&self, other: &Money) -> Money {
        let lhs = self.convert(other.currency);
        Money::new(lhs.amount + other.amount, other.currency)
    }

    /// Difference in `other`'s currency (same rule as [`Money::add`]).
    pub fn subtract(&self, other: &Money) -> Money {
        let lhs = self.convert(other.currency);
        Money::new(lhs.amount - other.amount, other.currency)
    }
}

impl ValueObject for Money {}

impl core::ops::Add for &Money {
    type Output = Money;

    fn add(self, rhs: &Money) -> Money {
        Money::add(self, rhs)
    }
}

impl core::ops::Sub for &Money {
    type Output = Money;

    fn sub(self, rhs: &Money) -> Money {
        self.subtract(rhs)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

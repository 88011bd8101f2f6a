use serde::{Deserialize, Serialize};

use household_core::ValueObject;

/// Hours per year assumed by [`Job::calculate_income`].
pub const DEFAULT_ANNUAL_HOURS: f64 = 2000.0;

/// How a job pays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayType {
    /// Wage per hour.
    Hourly(f64),
    /// Fixed annual amount.
    Salary(i64),
}

impl PayType {
    pub fn income_for_hours(self, hours: f64) -> i64 {
        match self {
            PayType::Hourly(wage) => (wage * hours).round() as i64,
            PayType::Salary(amount) => amount,
        }
    }

    /// Flat raise. A salary only takes the whole-unit part of `amount`.
    pub fn raised_by_amount(self, amount: f64) -> PayType {
        match self {
            PayType::Hourly(wage) => PayType::Hourly(wage + amount),
            PayType::Salary(salary) => PayType::Salary(salary + amount.trunc() as i64),
        }
    }

    /// Relative raise; `0.1` is ten percent.
    pub fn raised_by_percent(self, percent: f64) -> PayType {
        match self {
            PayType::Hourly(wage) => PayType::Hourly(wage * (1.0 + percent)),
            PayType::Salary(salary) => {
                PayType::Salary((salary as f64 * (1.0 + percent)).round() as i64)
            }
        }
    }
}

impl ValueObject for PayType {}

impl core::fmt::Display for PayType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            // `{:?}` keeps the fractional digit: 20.0 renders as "20.0".
            PayType::Hourly(wage) => write!(f, "Hourly({wage:?})"),
            PayType::Salary(amount) => write!(f, "Salary({amount})"),
        }
    }
}

/// A titled position with a pay structure. Raises mutate the job in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    title: String,
    pay: PayType,
}

impl Job {
    pub fn new(title: impl Into<String>, pay: PayType) -> Self {
        Self {
            title: title.into(),
            pay,
        }
    }

    pub fn hourly(title: impl Into<String>, wage: f64) -> Self {
        Self::new(title, PayType::Hourly(wage))
    }

    pub fn salaried(title: impl Into<String>, amount: i64) -> Self {
        Self::new(title, PayType::Salary(amount))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn pay(&self) -> PayType {
        self.pay
    }

    /// Annual income at [`DEFAULT_ANNUAL_HOURS`].
    pub fn calculate_income(&self) -> i64 {
        self.income_for_hours(DEFAULT_ANNUAL_HOURS)
    }

    /// Income for `hours` worked. Salaries ignore `hours`.
    pub fn income_for_hours(&self, hours: f64) -> i64 {
        self.pay.income_for_hours(hours)
    }

    pub fn raise_by_amount(&mut self, amount: f64) {
        self.pay = self.pay.raised_by_amount(amount);
    }

    pub fn raise_by_percent(&mut self, percent: f64) {
        self.pay = self.pay.raised_by_percent(percent);
    }
}

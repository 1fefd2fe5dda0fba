// ============================================================================
// Forward Rate
// ============================================================================

use super::rate::ExchangeRate;
use crate::domain::currency::Currency;
use crate::domain::errors::MoneyResult;
use crate::domain::DirectionalCurrencyPair;
use crate::interfaces::Exchange;
use crate::numeric::Rational;
use chrono::NaiveDate;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// An exchange rate agreed for settlement on `value_date`.
///
/// The date is carried through inversion but plays no part in conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ForwardRate<F, T> {
    spot: ExchangeRate<F, T>,
    value_date: NaiveDate,
}

impl<F: Currency, T: Currency> ForwardRate<F, T> {
    /// # Errors
    /// Returns `InvalidRate` if `rate` is zero or negative.
    pub fn new(rate: Rational, from: F, to: T, value_date: NaiveDate) -> MoneyResult<Self> {
        Ok(Self::from_spot(ExchangeRate::new(rate, from, to)?, value_date))
    }

    pub fn parse(rate: &str, from: F, to: T, value_date: NaiveDate) -> MoneyResult<Self> {
        Ok(Self::from_spot(ExchangeRate::parse(rate, from, to)?, value_date))
    }

    pub fn from_pair(
        rate: Rational,
        pair: DirectionalCurrencyPair<F, T>,
        value_date: NaiveDate,
    ) -> MoneyResult<Self> {
        Ok(Self::from_spot(ExchangeRate::from_pair(rate, pair)?, value_date))
    }

    pub fn from_spot(spot: ExchangeRate<F, T>, value_date: NaiveDate) -> Self {
        Self { spot, value_date }
    }

    pub fn value_date(&self) -> NaiveDate {
        self.value_date
    }

    /// The undated rate.
    pub fn spot(&self) -> &ExchangeRate<F, T> {
        &self.spot
    }

    pub fn rate(&self) -> &Rational {
        self.spot.rate()
    }

    pub fn invert(&self) -> ForwardRate<T, F> {
        ForwardRate::from_spot(self.spot.invert(), self.value_date)
    }
}

impl<F: Currency, T: Currency> Exchange<F, T> for ForwardRate<F, T> {
    fn from_currency(&self) -> &F {
        self.spot.from_currency()
    }

    fn to_currency(&self) -> &T {
        self.spot.to_currency()
    }

    fn rate(&self) -> &Rational {
        self.spot.rate()
    }
}

impl<F: Currency, T: Currency> fmt::Display for ForwardRate<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.spot, self.value_date)
    }
}

// ============================================================================
// Exchange Rate
// Positive exact conversion factor between two currencies
// ============================================================================

use super::forward::ForwardRate;
use crate::domain::currency::{ensure_same_currency, Currency};
use crate::domain::errors::{MoneyError, MoneyResult};
use crate::domain::DirectionalCurrencyPair;
use crate::interfaces::Exchange;
use crate::numeric::Rational;
use chrono::NaiveDate;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Units of `T` received per unit of `F`.
///
/// # Example
/// ```
/// use exact_money::prelude::*;
///
/// let usd_pln = ExchangeRate::parse("4.00", USD, PLN)?;
/// let pln = usd_pln.exchange(&Money::parse("1000", USD)?)?;
/// assert_eq!(pln, Money::parse("4000", PLN)?);
/// assert_eq!(*usd_pln.invert().rate(), Rational::from_ratio(1, 4)?);
/// # Ok::<(), MoneyError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ExchangeRate<F, T> {
    from: F,
    to: T,
    rate: Rational,
}

impl<F: Currency, T: Currency> ExchangeRate<F, T> {
    /// # Errors
    /// Returns `InvalidRate` if `rate` is zero or negative.
    pub fn new(rate: Rational, from: F, to: T) -> MoneyResult<Self> {
        if !rate.is_positive() {
            return Err(MoneyError::InvalidRate(format!(
                "{}/{} rate {} must be positive",
                from.code(),
                to.code(),
                rate
            )));
        }
        Ok(Self::from_validated(rate, from, to))
    }

    pub fn parse(rate: &str, from: F, to: T) -> MoneyResult<Self> {
        Self::new(rate.parse()?, from, to)
    }

    pub fn from_decimal(rate: rust_decimal::Decimal, from: F, to: T) -> MoneyResult<Self> {
        Self::new(Rational::from(rate), from, to)
    }

    /// Rate selling `pair.sell` for `pair.buy`.
    pub fn from_pair(rate: Rational, pair: DirectionalCurrencyPair<F, T>) -> MoneyResult<Self> {
        Self::new(rate, pair.sell, pair.buy)
    }

    /// Caller guarantees `rate > 0`.
    pub(crate) fn from_validated(rate: Rational, from: F, to: T) -> Self {
        debug_assert!(rate.is_positive());
        Self { from, to, rate }
    }

    pub fn from_currency(&self) -> &F {
        &self.from
    }

    pub fn to_currency(&self) -> &T {
        &self.to
    }

    pub fn rate(&self) -> &Rational {
        &self.rate
    }

    pub fn pair(&self) -> DirectionalCurrencyPair<F, T> {
        DirectionalCurrencyPair::new(self.from.clone(), self.to.clone())
    }

    pub fn invert(&self) -> ExchangeRate<T, F> {
        ExchangeRate::from_validated(self.rate.invert_nonzero(), self.to.clone(), self.from.clone())
    }

    /// Chain `F → X` and `X → T` into `F → T`.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` if `ab` does not end where `bc` starts,
    /// which only a dynamic `X` can get past the type checker.
    pub fn compose<X: Currency>(ab: &ExchangeRate<F, X>, bc: &ExchangeRate<X, T>) -> MoneyResult<Self> {
        ensure_same_currency(&ab.to, &bc.from)?;
        Ok(Self::from_validated(
            &ab.rate * &bc.rate,
            ab.from.clone(),
            bc.to.clone(),
        ))
    }

    /// `self` followed by `next`.
    pub fn then<U: Currency>(&self, next: &ExchangeRate<T, U>) -> MoneyResult<ExchangeRate<F, U>> {
        ExchangeRate::compose(self, next)
    }

    /// Attach a value date.
    pub fn forward(&self, value_date: NaiveDate) -> ForwardRate<F, T> {
        ForwardRate::from_spot(self.clone(), value_date)
    }
}

impl<F: Currency, T: Currency> Exchange<F, T> for ExchangeRate<F, T> {
    fn from_currency(&self) -> &F {
        &self.from
    }

    fn to_currency(&self) -> &T {
        &self.to
    }

    fn rate(&self) -> &Rational {
        &self.rate
    }
}

impl<F: Currency, T: Currency> fmt::Display for ExchangeRate<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} {}", self.from.code(), self.to.code(), self.rate)
    }
}

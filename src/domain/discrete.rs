// ============================================================================
// Discrete Amounts
// Whole counts of a currency unit with an arbitrary rational scale
// ============================================================================

use super::currency::{ensure_same_currency, Currency};
use super::errors::{MoneyError, MoneyResult};
use super::money::Money;
use crate::numeric::{Rational, RoundingMode};
use num_bigint::BigInt;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A countable unit: `scale` of them make one major unit of the currency.
///
/// Cents have scale 100 and satoshis 10^8. The scale does not have to be
/// a power of ten, nor an integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Unit {
    symbol: String,
    scale: Rational,
    #[cfg_attr(feature = "serde", serde(skip))]
    size: Rational,
}

impl Unit {
    /// # Errors
    /// Returns `InvalidConfig` unless `scale` is positive.
    pub fn new(symbol: impl Into<String>, scale: Rational) -> MoneyResult<Self> {
        let symbol = symbol.into();
        if !scale.is_positive() {
            return Err(MoneyError::InvalidConfig(format!("unit {} has scale {}", symbol, scale)));
        }
        let size = scale.inverse()?;
        Ok(Self { symbol, scale, size })
    }

    /// The currency's minor unit, named by its code.
    pub fn minor<C: Currency>(currency: &C) -> Self {
        let digits = u32::from(currency.fraction_digits());
        let scale = Rational::from_integer(BigInt::from(10u32).pow(digits));
        let size = Rational::from_scaled(BigInt::from(1), digits);
        Self {
            symbol: currency.code().to_string(),
            scale,
            size,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Units per major unit.
    pub fn scale(&self) -> &Rational {
        &self.scale
    }

    /// Value of one unit in major units.
    pub fn size(&self) -> &Rational {
        &self.size
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

/// A whole number of `unit`s of currency `C`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Discrete<C> {
    units: BigInt,
    unit: Unit,
    currency: C,
}

/// Result of splitting money into whole units: `discrete` plus the
/// `residual` that did not fill a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discretized<C> {
    pub discrete: Discrete<C>,
    pub residual: Money<C>,
}

impl<C: Currency> Discretized<C> {
    /// The original amount.
    pub fn reconstruct(&self) -> Money<C> {
        self.discrete.to_money().add_amount(self.residual.amount())
    }
}

impl<C: Currency> Discrete<C> {
    pub fn new(units: impl Into<BigInt>, unit: Unit, currency: C) -> Self {
        Self {
            units: units.into(),
            unit,
            currency,
        }
    }

    pub fn units(&self) -> &BigInt {
        &self.units
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn currency(&self) -> &C {
        &self.currency
    }

    /// Exact value in major units.
    pub fn to_money(&self) -> Money<C> {
        let amount = &Rational::from_integer(self.units.clone()) * &self.unit.size;
        Money::new(amount, self.currency.clone())
    }

    /// # Errors
    /// Returns `CurrencyMismatch` or `UnitMismatch` unless both sides count
    /// the same unit of the same currency.
    pub fn checked_add<O: Currency>(&self, other: &Discrete<O>) -> MoneyResult<Self> {
        self.ensure_compatible(other)?;
        Ok(Self::new(&self.units + &other.units, self.unit.clone(), self.currency.clone()))
    }

    /// # Errors
    /// Same as [`Discrete::checked_add`].
    pub fn checked_sub<O: Currency>(&self, other: &Discrete<O>) -> MoneyResult<Self> {
        self.ensure_compatible(other)?;
        Ok(Self::new(&self.units - &other.units, self.unit.clone(), self.currency.clone()))
    }

    fn ensure_compatible<O: Currency>(&self, other: &Discrete<O>) -> MoneyResult<()> {
        ensure_same_currency(&self.currency, &other.currency)?;
        if self.unit != other.unit {
            return Err(MoneyError::UnitMismatch {
                left: self.unit.symbol.clone(),
                right: other.unit.symbol.clone(),
            });
        }
        Ok(())
    }
}

impl<C: Currency> fmt::Display for Discrete<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.units, self.unit, self.currency)
    }
}

impl<C: Currency> Money<C> {
    /// Whole `unit`s under `mode`, with the rest kept as residual money.
    pub fn to_discrete(&self, unit: &Unit, mode: RoundingMode) -> Discretized<C> {
        let units = (self.amount() * &unit.scale).round_integer(mode);
        let discrete = Discrete::new(units, unit.clone(), self.currency().clone());
        let residual = self.sub_amount(discrete.to_money().amount());
        Discretized { discrete, residual }
    }
}

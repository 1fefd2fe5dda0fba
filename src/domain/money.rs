// ============================================================================
// Money Domain Model
// Exact rational amount tagged with its currency
// ============================================================================

use super::currency::{ensure_same_currency, AnyCurrency, Currency, StaticCurrency};
use super::errors::MoneyResult;
use crate::interfaces::Exchange;
use crate::numeric::{Rational, Rounded, RoundingMode};
use num_bigint::BigInt;
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An exact amount of currency `C`.
///
/// With a typed marker (`Money<USD>`) the compiler rejects arithmetic
/// between currencies; with [`AnyCurrency`] the same operations are
/// checked at runtime and fail with `CurrencyMismatch`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Money<C> {
    amount: Rational,
    currency: C,
}

/// Amount split into whole minor units plus what rounding left over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinorUnits<C> {
    pub units: BigInt,
    pub residual: Money<C>,
}

impl<C: Currency> MinorUnits<C> {
    /// Rebuild the original amount: `units` minor units plus the residual.
    pub fn reconstruct(&self) -> Money<C> {
        let whole = Money::from_minor_units(self.units.clone(), self.residual.currency.clone());
        whole.add_amount(&self.residual.amount)
    }
}

impl<C: Currency> Money<C> {
    pub fn new(amount: Rational, currency: C) -> Self {
        Self { amount, currency }
    }

    /// Parse a plain decimal (`"1234.56"`) or a fraction (`"1/3"`).
    ///
    /// # Errors
    /// Returns `Numeric(InvalidInput)` if `input` is not a number.
    pub fn parse(input: &str, currency: C) -> MoneyResult<Self> {
        Ok(Self::new(input.parse()?, currency))
    }

    pub fn from_decimal(amount: rust_decimal::Decimal, currency: C) -> Self {
        Self::new(Rational::from(amount), currency)
    }

    /// `units` of the currency's minor unit (cents for USD, fils for BHD).
    pub fn from_minor_units(units: impl Into<BigInt>, currency: C) -> Self {
        let scale = u32::from(currency.fraction_digits());
        Self::new(Rational::from_scaled(units.into(), scale), currency)
    }

    pub fn zero(currency: C) -> Self {
        Self::new(Rational::zero(), currency)
    }

    pub fn amount(&self) -> &Rational {
        &self.amount
    }

    pub fn currency(&self) -> &C {
        &self.currency
    }

    pub fn into_parts(self) -> (Rational, C) {
        (self.amount, self.currency)
    }

    pub fn fraction_digits(&self) -> u8 {
        self.currency.fraction_digits()
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.amount.is_positive()
    }

    pub fn is_negative(&self) -> bool {
        self.amount.is_negative()
    }

    pub fn signum(&self) -> i32 {
        self.amount.signum()
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// # Errors
    /// Returns `CurrencyMismatch` if `other` is in another currency.
    pub fn checked_add<O: Currency>(&self, other: &Money<O>) -> MoneyResult<Self> {
        ensure_same_currency(&self.currency, &other.currency)?;
        Ok(self.add_amount(&other.amount))
    }

    /// # Errors
    /// Returns `CurrencyMismatch` if `other` is in another currency.
    pub fn checked_sub<O: Currency>(&self, other: &Money<O>) -> MoneyResult<Self> {
        ensure_same_currency(&self.currency, &other.currency)?;
        Ok(self.sub_amount(&other.amount))
    }

    /// Add a unitless amount.
    pub fn add_amount(&self, amount: &Rational) -> Self {
        Self::new(&self.amount + amount, self.currency.clone())
    }

    /// Subtract a unitless amount.
    pub fn sub_amount(&self, amount: &Rational) -> Self {
        Self::new(&self.amount - amount, self.currency.clone())
    }

    pub fn negate(&self) -> Self {
        Self::new(-&self.amount, self.currency.clone())
    }

    pub fn abs(&self) -> Self {
        Self::new(self.amount.abs(), self.currency.clone())
    }

    pub fn multiply(&self, factor: &Rational) -> Self {
        Self::new(&self.amount * factor, self.currency.clone())
    }

    /// # Errors
    /// Returns `Numeric(DivisionByZero)` if `divisor` is zero.
    pub fn divide(&self, divisor: &Rational) -> MoneyResult<Self> {
        Ok(Self::new(self.amount.checked_div(divisor)?, self.currency.clone()))
    }

    /// # Errors
    /// Returns `CurrencyMismatch` if `other` is in another currency.
    pub fn compare<O: Currency>(&self, other: &Money<O>) -> MoneyResult<Ordering> {
        ensure_same_currency(&self.currency, &other.currency)?;
        Ok(self.amount.cmp(&other.amount))
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Round to the currency's fraction digits, keeping the residual.
    pub fn to_decimal(&self, mode: RoundingMode) -> Rounded {
        self.amount
            .round_to_scale(u32::from(self.currency.fraction_digits()), mode)
    }

    /// [`Money::to_decimal`] with half-up rounding.
    pub fn to_decimal_default(&self) -> Rounded {
        self.to_decimal(RoundingMode::HalfUp)
    }

    /// Whole minor units, with the fraction of a minor unit carried as
    /// residual money in the same currency.
    pub fn to_minor_units(&self, mode: RoundingMode) -> MinorUnits<C> {
        let Rounded { value, residual } = self.to_decimal(mode);
        MinorUnits {
            units: value.unscaled().clone(),
            residual: Self::new(residual, self.currency.clone()),
        }
    }

    // ========================================================================
    // Currency Conversion
    // ========================================================================

    /// Reinterpret as `Money<T>` once the runtime code is confirmed to be
    /// `T`'s.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` if the codes differ.
    pub fn narrow<T: StaticCurrency>(&self) -> MoneyResult<Money<T>> {
        let target = T::instance();
        ensure_same_currency(&self.currency, &target)?;
        Ok(Money::new(self.amount.clone(), target))
    }

    /// Forget the static currency type.
    pub fn erase(&self) -> Money<AnyCurrency> {
        Money::new(
            self.amount.clone(),
            AnyCurrency::from_descriptor(self.currency.descriptor()),
        )
    }

    /// Convert through any rate-like value from `C` to `T`.
    pub fn convert<T: Currency, X: Exchange<C, T>>(&self, rate: &X) -> MoneyResult<Money<T>> {
        rate.exchange(self)
    }
}

// ============================================================================
// Operators
// ============================================================================
// Total only for typed markers, where the type system already guarantees
// both sides share a currency.

impl<C: StaticCurrency> Add for Money<C> {
    type Output = Money<C>;

    fn add(self, rhs: Money<C>) -> Money<C> {
        Money::new(self.amount + rhs.amount, self.currency)
    }
}

impl<C: StaticCurrency> Add<&Money<C>> for &Money<C> {
    type Output = Money<C>;

    fn add(self, rhs: &Money<C>) -> Money<C> {
        self.add_amount(&rhs.amount)
    }
}

impl<C: StaticCurrency> Sub for Money<C> {
    type Output = Money<C>;

    fn sub(self, rhs: Money<C>) -> Money<C> {
        Money::new(self.amount - rhs.amount, self.currency)
    }
}

impl<C: StaticCurrency> Sub<&Money<C>> for &Money<C> {
    type Output = Money<C>;

    fn sub(self, rhs: &Money<C>) -> Money<C> {
        self.sub_amount(&rhs.amount)
    }
}

impl<C: Currency> Neg for Money<C> {
    type Output = Money<C>;

    fn neg(self) -> Money<C> {
        Money::new(-self.amount, self.currency)
    }
}

impl<C: Currency> Neg for &Money<C> {
    type Output = Money<C>;

    fn neg(self) -> Money<C> {
        self.negate()
    }
}

impl<C: StaticCurrency> Sum for Money<C> {
    fn sum<I: Iterator<Item = Money<C>>>(iter: I) -> Self {
        iter.fold(Money::zero(C::instance()), |acc, money| acc + money)
    }
}

impl<'a, C: StaticCurrency> Sum<&'a Money<C>> for Money<C> {
    fn sum<I: Iterator<Item = &'a Money<C>>>(iter: I) -> Self {
        iter.fold(Money::zero(C::instance()), |acc, money| &acc + money)
    }
}

impl<C: Currency> fmt::Display for Money<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_decimal_default().value, self.currency.code())
    }
}

// ============================================================================
// Exchange Interface
// Contract shared by every rate-like value that converts F into T
// ============================================================================

use crate::domain::currency::{ensure_same_currency, Currency};
use crate::domain::errors::MoneyResult;
use crate::domain::Money;
use crate::numeric::Rational;

/// A positive conversion factor from currency `F` into currency `T`.
///
/// Implemented by spot and forward rates so valuation and
/// [`Money::convert`] work over either.
pub trait Exchange<F: Currency, T: Currency> {
    fn from_currency(&self) -> &F;

    fn to_currency(&self) -> &T;

    /// Units of `T` per unit of `F`; always positive.
    fn rate(&self) -> &Rational;

    /// Convert an amount in `F`.
    ///
    /// The type already pins the currency, but `F` may be
    /// [`AnyCurrency`](crate::domain::currency::AnyCurrency), so the code is
    /// still checked.
    fn exchange(&self, money: &Money<F>) -> MoneyResult<Money<T>> {
        self.exchange_any(money)
    }

    /// Convert an amount of any currency type, checking its code against
    /// `from_currency()`.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` if the money is not denominated in `F`.
    fn exchange_any<C: Currency>(&self, money: &Money<C>) -> MoneyResult<Money<T>> {
        ensure_same_currency(money.currency(), self.from_currency())?;
        Ok(Money::new(
            money.amount() * self.rate(),
            self.to_currency().clone(),
        ))
    }
}

// ============================================================================
// Bid/Ask Quote
// ============================================================================

use super::rate::ExchangeRate;
use crate::domain::currency::{ensure_same_currency, Currency};
use crate::domain::errors::{MoneyError, MoneyResult};
use crate::domain::{DealtAction, DirectionalCurrencyPair, Money};
use crate::numeric::Rational;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Two-way price for converting `F` into `T`, with `0 < bid <= ask`.
///
/// A counterparty selling `F` is filled at the bid; one buying `F` is
/// filled at the ask.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Quote<F, T> {
    from: F,
    to: T,
    bid: Rational,
    ask: Rational,
}

impl<F: Currency, T: Currency> Quote<F, T> {
    /// # Errors
    /// Returns `InvalidQuote` if either side is not positive or the bid
    /// exceeds the ask.
    pub fn new(bid: Rational, ask: Rational, from: F, to: T) -> MoneyResult<Self> {
        let pair = format!("{}/{}", from.code(), to.code());
        if !bid.is_positive() {
            return Err(MoneyError::InvalidQuote(format!("{} bid {} must be positive", pair, bid)));
        }
        if !ask.is_positive() {
            return Err(MoneyError::InvalidQuote(format!("{} ask {} must be positive", pair, ask)));
        }
        if bid > ask {
            return Err(MoneyError::InvalidQuote(format!(
                "{} bid {} exceeds ask {}",
                pair, bid, ask
            )));
        }
        Ok(Self { from, to, bid, ask })
    }

    pub fn parse(bid: &str, ask: &str, from: F, to: T) -> MoneyResult<Self> {
        Self::new(bid.parse()?, ask.parse()?, from, to)
    }

    pub fn from_decimal(
        bid: rust_decimal::Decimal,
        ask: rust_decimal::Decimal,
        from: F,
        to: T,
    ) -> MoneyResult<Self> {
        Self::new(Rational::from(bid), Rational::from(ask), from, to)
    }

    pub fn from_pair(bid: Rational, ask: Rational, pair: DirectionalCurrencyPair<F, T>) -> MoneyResult<Self> {
        Self::new(bid, ask, pair.sell, pair.buy)
    }

    pub fn from_currency(&self) -> &F {
        &self.from
    }

    pub fn to_currency(&self) -> &T {
        &self.to
    }

    pub fn bid(&self) -> &Rational {
        &self.bid
    }

    pub fn ask(&self) -> &Rational {
        &self.ask
    }

    pub fn mid(&self) -> Rational {
        (&self.bid + &self.ask).half()
    }

    pub fn spread(&self) -> Rational {
        &self.ask - &self.bid
    }

    /// Spread as a fraction of the mid.
    pub fn spread_relative(&self) -> Rational {
        self.spread() * self.mid().invert_nonzero()
    }

    /// The side of the quote an action fills at.
    pub fn price(&self, action: DealtAction) -> &Rational {
        match action {
            DealtAction::Sell => &self.bid,
            DealtAction::Buy => &self.ask,
        }
    }

    pub fn bid_rate(&self) -> ExchangeRate<F, T> {
        ExchangeRate::from_validated(self.bid.clone(), self.from.clone(), self.to.clone())
    }

    pub fn ask_rate(&self) -> ExchangeRate<F, T> {
        ExchangeRate::from_validated(self.ask.clone(), self.from.clone(), self.to.clone())
    }

    pub fn mid_rate(&self) -> ExchangeRate<F, T> {
        ExchangeRate::from_validated(self.mid(), self.from.clone(), self.to.clone())
    }

    pub fn exchange(&self, money: &Money<F>, action: DealtAction) -> MoneyResult<Money<T>> {
        self.exchange_any(money, action)
    }

    /// # Errors
    /// Returns `CurrencyMismatch` if the money is not denominated in `F`.
    pub fn exchange_any<C: Currency>(&self, money: &Money<C>, action: DealtAction) -> MoneyResult<Money<T>> {
        self.convert_at(money, self.price(action))
    }

    pub fn exchange_at_mid(&self, money: &Money<F>) -> MoneyResult<Money<T>> {
        self.convert_at(money, &self.mid())
    }

    fn convert_at<C: Currency>(&self, money: &Money<C>, price: &Rational) -> MoneyResult<Money<T>> {
        ensure_same_currency(money.currency(), &self.from)?;
        Ok(Money::new(money.amount() * price, self.to.clone()))
    }

    /// Quote for the reverse direction: `bid' = 1/ask`, `ask' = 1/bid`.
    pub fn invert(&self) -> Quote<T, F> {
        Quote {
            from: self.to.clone(),
            to: self.from.clone(),
            bid: self.ask.invert_nonzero(),
            ask: self.bid.invert_nonzero(),
        }
    }
}

impl<F: Currency, T: Currency> fmt::Display for Quote<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} {} / {}",
            self.from.code(),
            self.to.code(),
            self.bid,
            self.ask
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::currency::{AnyCurrency, PLN, USD};

    fn usd_pln() -> Quote<USD, PLN> {
        Quote::parse("3.95", "4.05", USD, PLN).unwrap()
    }

    fn r(value: &str) -> Rational {
        value.parse().unwrap()
    }

    #[test]
    fn test_validation() {
        assert!(matches!(Quote::parse("0", "4", USD, PLN), Err(MoneyError::InvalidQuote(_))));
        assert!(matches!(Quote::parse("4", "-1", USD, PLN), Err(MoneyError::InvalidQuote(_))));
        assert!(matches!(Quote::parse("4.1", "4", USD, PLN), Err(MoneyError::InvalidQuote(_))));
        assert!(Quote::parse("4", "4", USD, PLN).is_ok());
    }

    #[test]
    fn test_mid_and_spread() {
        let quote = usd_pln();
        assert_eq!(quote.mid(), r("4"));
        assert_eq!(quote.spread(), r("0.1"));
        assert_eq!(quote.spread_relative(), r("0.025"));
        assert_eq!(quote.mid_rate().rate(), &r("4"));
        assert_eq!(quote.bid_rate().rate(), &r("3.95"));
        assert_eq!(quote.ask_rate().rate(), &r("4.05"));
    }

    #[test]
    fn test_exchange_by_action() {
        let quote = usd_pln();
        let thousand = Money::parse("1000", USD).unwrap();

        let sold = quote.exchange(&thousand, DealtAction::Sell).unwrap();
        let bought = quote.exchange(&thousand, DealtAction::Buy).unwrap();
        let mid = quote.exchange_at_mid(&thousand).unwrap();

        assert_eq!(sold, Money::parse("3950", PLN).unwrap());
        assert_eq!(bought, Money::parse("4050", PLN).unwrap());
        assert_eq!(mid, Money::parse("4000", PLN).unwrap());
    }

    #[test]
    fn test_exchange_any_checks_currency() {
        let pln = Money::parse("1", AnyCurrency::of("PLN").unwrap()).unwrap();
        assert_eq!(
            usd_pln().exchange_any(&pln, DealtAction::Buy),
            Err(MoneyError::mismatch("PLN", "USD"))
        );
    }

    #[test]
    fn test_invert() {
        let inverted = usd_pln().invert();
        assert_eq!(inverted.bid(), &Rational::from_ratio(20, 81).unwrap());
        assert_eq!(inverted.ask(), &Rational::from_ratio(20, 79).unwrap());
        assert!(inverted.bid() <= inverted.ask());
        assert_eq!(inverted.invert(), usd_pln());
        assert_eq!(usd_pln().to_string(), "USD/PLN 79/20 / 81/20");
    }
}

// ============================================================================
// Mark-to-Market Valuation
// ============================================================================

use crate::domain::currency::Currency;
use crate::domain::errors::MoneyResult;
use crate::domain::{DealtAction, Money};
use crate::interfaces::Exchange;

/// Valuation of a booked FX deal against the current market rate.
///
/// Both rates convert the booked amount into `T`. Having sold `F` at the
/// booked rate, the deal gains when the market rate has fallen since:
/// `Sell ⇒ booked − market`, `Buy ⇒ market − booked`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkToMarket<T> {
    pub action: DealtAction,
    pub booked_value: Money<T>,
    pub market_value: Money<T>,
    pub value: Money<T>,
}

impl<T: Currency> MarkToMarket<T> {
    /// Value the deal and return only the profit or loss in `T`.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` if the amount or either rate disagrees
    /// on currencies at runtime.
    pub fn derive<F, B, M>(
        booked: &B,
        market: &M,
        booked_amount: &Money<F>,
        action: DealtAction,
    ) -> MoneyResult<Money<T>>
    where
        F: Currency,
        B: Exchange<F, T>,
        M: Exchange<F, T>,
    {
        Ok(Self::evaluate(booked, market, booked_amount, action)?.value)
    }

    /// Value the deal, keeping both legs of the calculation.
    pub fn evaluate<F, B, M>(
        booked: &B,
        market: &M,
        booked_amount: &Money<F>,
        action: DealtAction,
    ) -> MoneyResult<Self>
    where
        F: Currency,
        B: Exchange<F, T>,
        M: Exchange<F, T>,
    {
        let booked_value = booked.exchange(booked_amount)?;
        let market_value = market.exchange(booked_amount)?;

        let value = match action {
            DealtAction::Sell => booked_value.checked_sub(&market_value)?,
            DealtAction::Buy => market_value.checked_sub(&booked_value)?,
        };

        tracing::debug!(
            %action,
            booked = %booked.rate(),
            market = %market.rate(),
            value = %value,
            "derived mark-to-market"
        );

        Ok(Self {
            action,
            booked_value,
            market_value,
            value,
        })
    }
}

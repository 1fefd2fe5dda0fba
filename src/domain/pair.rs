// ============================================================================
// Directional Currency Pair
// ============================================================================

use super::currency::Currency;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered pair: what is sold and what is bought in exchange.
///
/// Rates and quotes built from a pair convert from `sell` into `buy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DirectionalCurrencyPair<S, B> {
    pub sell: S,
    pub buy: B,
}

impl<S: Currency, B: Currency> DirectionalCurrencyPair<S, B> {
    pub fn new(sell: S, buy: B) -> Self {
        Self { sell, buy }
    }

    pub fn invert(self) -> DirectionalCurrencyPair<B, S> {
        DirectionalCurrencyPair {
            sell: self.buy,
            buy: self.sell,
        }
    }

    /// True when both sides name the same currency
    pub fn is_degenerate(&self) -> bool {
        self.sell.same_currency(&self.buy)
    }
}

impl<S: Currency, B: Currency> fmt::Display for DirectionalCurrencyPair<S, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.sell.code(), self.buy.code())
    }
}

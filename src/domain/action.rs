// ============================================================================
// Dealt Action
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What the dealer does with the base (from) currency of a quote.
///
/// Selling the base currency fills at the bid; buying it fills at the ask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DealtAction {
    Buy,
    Sell,
}

impl DealtAction {
    pub const fn invert(self) -> Self {
        match self {
            DealtAction::Buy => DealtAction::Sell,
            DealtAction::Sell => DealtAction::Buy,
        }
    }
}

impl fmt::Display for DealtAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealtAction::Buy => f.write_str("BUY"),
            DealtAction::Sell => f.write_str("SELL"),
        }
    }
}

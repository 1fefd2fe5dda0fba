// ============================================================================
// Exact Money Library
// Exact rational money arithmetic with currency-typed amounts and FX
// ============================================================================

//! # Exact Money
//!
//! Monetary values backed by arbitrary-precision rationals, so chained
//! conversions and valuations never accumulate rounding error.
//!
//! ## Features
//!
//! - **Exact arithmetic**: amounts are fractions in lowest terms; rounding
//!   happens only when asked for, and always hands back the residual
//! - **Currency-typed amounts**: `Money<USD> + Money<EUR>` does not compile
//! - **Runtime-checked escape hatch**: `Money<AnyCurrency>` for codes only
//!   known at runtime, narrowed back with [`Money::narrow`](domain::Money::narrow)
//! - **FX**: spot and forward rates, bid/ask quotes, inversion, composition
//!   and mark-to-market valuation
//!
//! ## Example
//!
//! ```rust
//! use exact_money::prelude::*;
//!
//! let quote = Quote::parse("3.95", "4.05", USD, PLN)?;
//! let notional = Money::parse("1000", USD)?;
//!
//! assert_eq!(quote.exchange(&notional, DealtAction::Sell)?.to_string(), "3950.00 PLN");
//! assert_eq!(quote.exchange(&notional, DealtAction::Buy)?.to_string(), "4050.00 PLN");
//!
//! // One third of a dollar, rounded to cents, with nothing lost
//! let third = notional.divide(&Rational::from(3000))?;
//! let rounded = third.to_decimal(RoundingMode::HalfUp);
//! assert_eq!(rounded.value.to_string(), "0.33");
//! assert_eq!(rounded.residual, Rational::from_ratio(1, 300)?);
//! # Ok::<(), MoneyError>(())
//! ```

pub mod domain;
pub mod fx;
pub mod interfaces;
#[cfg(feature = "logging")]
pub mod logging;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::currency::{
        AnyCurrency, Currency, CurrencyDescriptor, IsoCurrency, IsoRegistry, SimpleCurrencyRegistry,
        StaticCurrency, BHD, CAD, CHF, CZK, EUR, GBP, HKD, HUF, ILS, JPY, PLN, USD,
    };
    pub use crate::domain::{
        DealtAction, DirectionalCurrencyPair, Discrete, Discretized, MinorUnits, Money, MoneyError,
        MoneyResult, RegistryConfig, Unit,
    };
    pub use crate::fx::{ExchangeRate, ForwardRate, MarkToMarket, Quote};
    pub use crate::interfaces::{CurrencyRegistry, Exchange};
    pub use crate::numeric::{NumericError, NumericResult, Rational, RoundingMode, Rounded, ScaledDecimal};
}

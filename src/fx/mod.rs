// ============================================================================
// FX Module
// Exchange rates, forward rates, two-way quotes and valuation
// ============================================================================
//
// Rates and quotes are only ever built through validating constructors,
// so a value in hand always satisfies `rate > 0` or `0 < bid <= ask`.
// Inversion and composition preserve that without re-checking.

mod forward;
mod quote;
mod rate;
mod valuation;

pub use forward::ForwardRate;
pub use quote::Quote;
pub use rate::ExchangeRate;
pub use valuation::MarkToMarket;

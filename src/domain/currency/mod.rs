// ============================================================================
// Currency Module
// ISO table, typed markers, dynamic currencies and registries
// ============================================================================

mod descriptor;
mod iso;
mod registry;
mod tag;

pub use descriptor::{is_well_formed_code, CurrencyDescriptor};
pub use iso::{
    IsoCurrency, BHD, CAD, CHF, CZK, EUR, GBP, HKD, HUF, ILS, JPY, PLN, TYPED_CURRENCIES, USD,
};
pub use registry::{IsoRegistry, SimpleCurrencyRegistry};
pub use tag::{AnyCurrency, Currency, StaticCurrency};

pub(crate) use tag::ensure_same_currency;

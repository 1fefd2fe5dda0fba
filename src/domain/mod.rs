// ============================================================================
// Domain Models Module
// Currencies, money values and the small value objects around them
// ============================================================================

pub mod action;
pub mod config;
pub mod currency;
pub mod discrete;
pub mod errors;
pub mod money;
pub mod pair;

pub use action::DealtAction;
pub use config::RegistryConfig;
pub use discrete::{Discrete, Discretized, Unit};
pub use errors::{MoneyError, MoneyResult};
pub use money::{MinorUnits, Money};
pub use pair::DirectionalCurrencyPair;

// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod currency_registry;
mod exchange;

pub use currency_registry::CurrencyRegistry;
pub use exchange::Exchange;

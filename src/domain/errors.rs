// ============================================================================
// Money Errors
// Error types for currency-aware operations
// ============================================================================

use crate::numeric::NumericError;
use thiserror::Error;

/// Errors raised by money, currency, rate and quote operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Exchange rate is zero or negative
    #[error("invalid rate: {0}")]
    InvalidRate(String),

    /// Bid or ask is not positive, or bid exceeds ask
    #[error("invalid quote: {0}")]
    InvalidQuote(String),

    /// Operands carry different currencies
    #[error("currency mismatch: {left} vs {right}")]
    CurrencyMismatch { left: String, right: String },

    /// Discrete amounts counted in different units
    #[error("unit mismatch: {left} vs {right}")]
    UnitMismatch { left: String, right: String },

    /// ISO code could not be resolved
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),

    /// Registry holds no descriptor for a typed currency's code
    #[error("missing currency descriptor for {0}")]
    MissingDescriptor(String),

    /// Code already registered with a different descriptor
    #[error("currency {0} is already registered with a different descriptor")]
    RegistrationConflict(String),

    /// Registry configuration rejected by validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Numeric(#[from] NumericError),
}

impl MoneyError {
    pub(crate) fn mismatch(left: &str, right: &str) -> Self {
        MoneyError::CurrencyMismatch {
            left: left.to_string(),
            right: right.to_string(),
        }
    }
}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;

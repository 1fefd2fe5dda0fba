// ============================================================================
// Numeric Errors
// Error types for exact rational arithmetic
// ============================================================================

use thiserror::Error;

/// Errors that can occur during exact rational arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum NumericError {
    /// A zero denominator or a division by a zero value
    #[error("division by zero")]
    DivisionByZero,
    /// Requested decimal scale (or precision) is not usable
    #[error("invalid scale {0}: decimal scale must not be negative")]
    InvalidScale(i64),
    /// Input string or value is invalid
    #[error("invalid input: could not parse '{0}' as a rational number")]
    InvalidInput(String),
    /// Value does not fit the target fixed-width representation
    #[error("arithmetic overflow: value does not fit the target representation")]
    Overflow,
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

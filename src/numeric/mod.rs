// ============================================================================
// Numeric Module
// Exact rational arithmetic for drift-free monetary calculations
// ============================================================================
//
// This module provides:
// - Rational: arbitrary-precision fraction in canonical lowest terms
// - RoundingMode: directed and half-way rounding rules
// - ScaledDecimal / Rounded: decimal rendering with the exact residual
// - NumericError: Error types for arithmetic operations
//
// Design principles:
// - No floating-point operations, not even for comparison
// - Every fallible operation returns Result (no panics)
// - Rounding always hands back what it removed

mod errors;
mod rational;
mod rounding;
mod scaled_decimal;

pub use errors::{NumericError, NumericResult};
pub use rational::{Rational, DEFAULT_APPROX_SCALE};
pub use rounding::RoundingMode;
pub use scaled_decimal::{Rounded, ScaledDecimal};

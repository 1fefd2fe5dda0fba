// ============================================================================
// Scaled Decimal
// Fixed-scale decimal produced by rounding a rational, plus its residual
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::rational::Rational;
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};
use std::fmt;

/// Decimal number `unscaled × 10^-scale`.
///
/// Unlike [`Rational`], the scale is part of the value: `1.0` and `1.00`
/// are different decimals that denote the same rational.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScaledDecimal {
    unscaled: BigInt,
    scale: u32,
}

impl ScaledDecimal {
    pub fn new(unscaled: BigInt, scale: u32) -> Self {
        Self { unscaled, scale }
    }

    /// Digits without the decimal point, sign included.
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// Number of digits after the decimal point.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        num_traits::Zero::is_zero(&self.unscaled)
    }

    /// Exact rational value of this decimal.
    pub fn to_rational(&self) -> Rational {
        Rational::from_scaled(self.unscaled.clone(), self.scale)
    }

    /// Convert to `rust_decimal::Decimal` for API boundaries.
    ///
    /// # Errors
    /// Returns `Overflow` if the digits do not fit in 96 bits or the scale
    /// exceeds 28.
    pub fn to_rust_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        let mantissa = self.unscaled.to_i128().ok_or(NumericError::Overflow)?;
        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, self.scale)
            .map_err(|_| NumericError::Overflow)
    }
}

impl fmt::Display for ScaledDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.unscaled.is_negative() { "-" } else { "" };
        let digits = self.unscaled.magnitude().to_string();

        if self.scale == 0 {
            return write!(f, "{}{}", sign, digits);
        }

        // Left-pad so there is at least one integer digit
        let scale = self.scale as usize;
        let padded = format!("{:0>width$}", digits, width = scale + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);
        write!(f, "{}{}.{}", sign, int_part, frac_part)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ScaledDecimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Result of rounding a rational to a decimal.
///
/// `residual` is exactly `original − value`; carry it forward to keep
/// repeated roundings from drifting.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rounded {
    pub value: ScaledDecimal,
    pub residual: Rational,
}

impl Rounded {
    /// Rebuild the original rational: `value + residual`.
    pub fn reconstruct(&self) -> Rational {
        &self.value.to_rational() + &self.residual
    }

    /// True when rounding lost nothing.
    pub fn is_exact(&self) -> bool {
        self.residual.is_zero()
    }
}

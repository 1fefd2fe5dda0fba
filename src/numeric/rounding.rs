// ============================================================================
// Rounding
// Integer division with an explicit rounding mode
// ============================================================================

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a quotient that is not a whole number is brought to an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Toward negative infinity
    Floor,
    /// Toward positive infinity
    Ceil,
    /// Toward zero
    Truncate,
    /// Nearest; ties move away from zero
    HalfUp,
    /// Nearest; ties move to the even neighbour
    HalfEven,
}

impl RoundingMode {
    pub const ALL: [RoundingMode; 5] = [
        RoundingMode::Floor,
        RoundingMode::Ceil,
        RoundingMode::Truncate,
        RoundingMode::HalfUp,
        RoundingMode::HalfEven,
    ];
}

/// Divide `numerator` by a strictly positive `denominator` and round the
/// quotient to an integer.
///
/// Works on the exact remainder only; no intermediate fixed-scale or
/// floating representation is involved.
pub(crate) fn div_round(numerator: &BigInt, denominator: &BigInt, mode: RoundingMode) -> BigInt {
    debug_assert!(denominator.is_positive());

    // Truncating division: quotient rounds toward zero
    let (quotient, remainder) = numerator.div_rem(denominator);
    if remainder.is_zero() {
        return quotient;
    }

    let negative = numerator.is_negative();
    let away_from_zero = if negative {
        &quotient - BigInt::one()
    } else {
        &quotient + BigInt::one()
    };

    match mode {
        RoundingMode::Truncate => quotient,
        RoundingMode::Floor => {
            if negative {
                away_from_zero
            } else {
                quotient
            }
        },
        RoundingMode::Ceil => {
            if negative {
                quotient
            } else {
                away_from_zero
            }
        },
        RoundingMode::HalfUp | RoundingMode::HalfEven => {
            let twice_remainder = remainder.abs() * BigInt::from(2);
            match twice_remainder.cmp(denominator) {
                Ordering::Less => quotient,
                Ordering::Greater => away_from_zero,
                Ordering::Equal => {
                    if mode == RoundingMode::HalfUp || quotient.is_odd() {
                        away_from_zero
                    } else {
                        quotient
                    }
                },
            }
        },
    }
}

// ============================================================================
// Exact Rational
// Arbitrary-precision fraction kept in canonical lowest-terms form
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::rounding::{div_round, RoundingMode};
use super::scaled_decimal::{Rounded, ScaledDecimal};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// Number of places used by [`Rational::to_approx_string_default`].
pub const DEFAULT_APPROX_SCALE: u32 = 10;

/// Exact fraction `numerator / denominator` of arbitrary-precision integers.
///
/// Every constructor normalizes, so the following always hold:
/// - `denominator > 0`
/// - `gcd(|numerator|, denominator) == 1`
/// - zero is `0/1`
///
/// Because the form is canonical, derived equality and hashing are exact.
///
/// # Example
/// ```
/// use exact_money::numeric::Rational;
///
/// let third = Rational::from_ratio(1, 3)?;
/// let total = &third + &third + third;
/// assert_eq!(total, Rational::one());
/// # Ok::<(), exact_money::numeric::NumericError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

/// 10^exponent
fn pow10(exponent: u32) -> BigInt {
    BigInt::from(10u32).pow(exponent)
}

impl Rational {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a rational from numerator and denominator.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `denominator` is zero.
    pub fn new(numerator: BigInt, denominator: BigInt) -> NumericResult<Self> {
        if denominator.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::normalize(numerator, denominator))
    }

    /// Create a rational from machine integers.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `denominator` is zero.
    pub fn from_ratio(numerator: i64, denominator: i64) -> NumericResult<Self> {
        Self::new(BigInt::from(numerator), BigInt::from(denominator))
    }

    /// Create a whole-number rational.
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self {
            numerator: value.into(),
            denominator: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    pub fn one() -> Self {
        Self::from_integer(1)
    }

    /// `unscaled × 10^-scale`
    pub(crate) fn from_scaled(unscaled: BigInt, scale: u32) -> Self {
        Self::normalize(unscaled, pow10(scale))
    }

    /// Bring a fraction to canonical form. `denominator` must be non-zero.
    fn normalize(mut numerator: BigInt, mut denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());

        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }

        // gcd(0, d) == d, which collapses every zero to 0/1
        let divisor = numerator.gcd(&denominator);
        if !divisor.is_one() {
            numerator /= &divisor;
            denominator /= &divisor;
        }

        Self {
            numerator,
            denominator,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// Always strictly positive.
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.numerator.is_positive()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// True when the denominator is one.
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// -1, 0 or 1.
    pub fn signum(&self) -> i32 {
        if self.numerator.is_negative() {
            -1
        } else if self.numerator.is_zero() {
            0
        } else {
            1
        }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    /// Exact division.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::normalize(
            &self.numerator * &rhs.denominator,
            &self.denominator * &rhs.numerator,
        ))
    }

    /// `1 / self`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `self` is zero.
    pub fn inverse(&self) -> NumericResult<Self> {
        if self.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(self.invert_nonzero())
    }

    /// `1 / self` for a value already known to be non-zero.
    pub(crate) fn invert_nonzero(&self) -> Self {
        debug_assert!(!self.is_zero());

        // Swapping keeps the pair coprime, only the sign needs to move
        if self.numerator.is_negative() {
            Self {
                numerator: -&self.denominator,
                denominator: -&self.numerator,
            }
        } else {
            Self {
                numerator: self.denominator.clone(),
                denominator: self.numerator.clone(),
            }
        }
    }

    /// Exactly half of this value.
    pub fn half(&self) -> Self {
        Self::normalize(self.numerator.clone(), &self.denominator * BigInt::from(2))
    }

    fn add_exact(&self, rhs: &Self) -> Self {
        if self.denominator == rhs.denominator {
            return Self::normalize(&self.numerator + &rhs.numerator, self.denominator.clone());
        }
        Self::normalize(
            &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }

    fn sub_exact(&self, rhs: &Self) -> Self {
        self.add_exact(&-rhs)
    }

    fn mul_exact(&self, rhs: &Self) -> Self {
        Self::normalize(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }

    // ========================================================================
    // Integer Extraction
    // ========================================================================

    /// Largest integer not greater than this value.
    pub fn floor(&self) -> BigInt {
        self.round_integer(RoundingMode::Floor)
    }

    /// Smallest integer not less than this value.
    pub fn ceil(&self) -> BigInt {
        self.round_integer(RoundingMode::Ceil)
    }

    /// Integer part, rounding toward zero.
    pub fn truncate(&self) -> BigInt {
        self.round_integer(RoundingMode::Truncate)
    }

    /// Nearest integer; ties move away from zero.
    pub fn round_half_up(&self) -> BigInt {
        self.round_integer(RoundingMode::HalfUp)
    }

    /// Nearest integer; ties move to the even quotient.
    pub fn round_half_even(&self) -> BigInt {
        self.round_integer(RoundingMode::HalfEven)
    }

    /// Nearest integer under `mode`.
    pub fn round_integer(&self, mode: RoundingMode) -> BigInt {
        div_round(&self.numerator, &self.denominator, mode)
    }

    // ========================================================================
    // Decimal Conversion
    // ========================================================================

    /// Round to a fixed number of decimal places, returning the decimal and
    /// the exact residual `self − decimal`.
    ///
    /// # Errors
    /// Returns `InvalidScale` if `scale` is negative.
    ///
    /// # Example
    /// ```
    /// use exact_money::numeric::{Rational, RoundingMode};
    ///
    /// let third = Rational::from_ratio(1, 3)?;
    /// let rounded = third.to_decimal(2, RoundingMode::HalfUp)?;
    /// assert_eq!(rounded.value.to_string(), "0.33");
    /// assert_eq!(rounded.residual, Rational::from_ratio(1, 300)?);
    /// # Ok::<(), exact_money::numeric::NumericError>(())
    /// ```
    pub fn to_decimal(&self, scale: i32, mode: RoundingMode) -> NumericResult<Rounded> {
        let scale = u32::try_from(scale).map_err(|_| NumericError::InvalidScale(scale.into()))?;
        Ok(self.round_to_scale(scale, mode))
    }

    /// Infallible form of [`Rational::to_decimal`] for a scale already known
    /// to be valid.
    pub fn round_to_scale(&self, scale: u32, mode: RoundingMode) -> Rounded {
        let unscaled = div_round(&(&self.numerator * pow10(scale)), &self.denominator, mode);
        let value = ScaledDecimal::new(unscaled, scale);
        let residual = self.sub_exact(&value.to_rational());
        Rounded { value, residual }
    }

    /// Round to at most `digits` significant digits.
    ///
    /// The scale never goes below zero, so whole-number digits beyond the
    /// precision are kept exactly. A carry into a new leading digit drops
    /// one place (`9.996` at three digits is `10.0`).
    ///
    /// # Errors
    /// Returns `InvalidScale` if `digits` is zero.
    pub fn to_significant(&self, digits: u32, mode: RoundingMode) -> NumericResult<Rounded> {
        if digits == 0 {
            return Err(NumericError::InvalidScale(0));
        }
        if self.is_zero() {
            return Ok(self.round_to_scale(0, mode));
        }

        let magnitude = self.decimal_exponent();
        let scale = i64::from(digits) - 1 - magnitude;
        let scale = u32::try_from(scale.max(0)).map_err(|_| NumericError::Overflow)?;
        let rounded = self.round_to_scale(scale, mode);

        // With scale > 0 the unscaled value holds exactly `digits` digits
        // unless the rounding carried
        if scale > 0 && rounded.value.unscaled().abs() >= pow10(digits) {
            return Ok(self.round_to_scale(scale - 1, mode));
        }
        Ok(rounded)
    }

    /// The `e` with `10^e <= |self| < 10^(e+1)`. `self` must be non-zero.
    fn decimal_exponent(&self) -> i64 {
        // |self| lies within a factor of two of 2^(bits(n) - bits(d))
        let binary = self.numerator.bits() as i64 - self.denominator.bits() as i64;
        let mut estimate = (binary as f64 * std::f64::consts::LOG10_2).floor() as i64;

        let magnitude = self.abs();
        while magnitude < Self::power_of_ten(estimate) {
            estimate -= 1;
        }
        while magnitude >= Self::power_of_ten(estimate + 1) {
            estimate += 1;
        }
        estimate
    }

    fn power_of_ten(exponent: i64) -> Self {
        if exponent >= 0 {
            Self::from_integer(pow10(exponent as u32))
        } else {
            Self::normalize(BigInt::one(), pow10(exponent.unsigned_abs() as u32))
        }
    }

    /// Approximate decimal rendering, prefixed with `~`, half-even rounded.
    pub fn to_approx_string(&self, scale: u32) -> String {
        format!("~{}", self.round_to_scale(scale, RoundingMode::HalfEven).value)
    }

    /// [`Rational::to_approx_string`] at [`DEFAULT_APPROX_SCALE`] places.
    pub fn to_approx_string_default(&self) -> String {
        self.to_approx_string(DEFAULT_APPROX_SCALE)
    }

    /// Convert to `rust_decimal::Decimal` for API boundaries.
    ///
    /// # Errors
    /// Returns `Overflow` if the rounded value does not fit a `Decimal`.
    pub fn to_rust_decimal(&self, scale: u32, mode: RoundingMode) -> NumericResult<rust_decimal::Decimal> {
        self.round_to_scale(scale, mode).value.to_rust_decimal()
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse `[+-]?digits`, rejecting everything `BigInt::from_str` would
/// tolerate beyond that (underscores, empty digit runs).
fn parse_integer(input: &str) -> Option<BigInt> {
    let digits = input.strip_prefix(['+', '-']).unwrap_or(input);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse().ok()
}

/// Parse `[+-]?digits(.digits)?` into `unscaled × 10^-scale`.
fn parse_decimal(input: &str) -> Option<Rational> {
    let (int_part, frac_part) = match input.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (input, None),
    };

    if int_part.strip_prefix(['+', '-']).unwrap_or(int_part).is_empty() {
        return None;
    }

    let frac_part = match frac_part {
        Some(frac) if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) => return None,
        Some(frac) => frac,
        None => "",
    };

    let unscaled = parse_integer(&format!("{}{}", int_part, frac_part))?;
    let scale = u32::try_from(frac_part.len()).ok()?;
    Some(Rational::from_scaled(unscaled, scale))
}

impl FromStr for Rational {
    type Err = NumericError;

    /// Parse a plain decimal or a fraction.
    ///
    /// # Examples
    /// - "4.75" -> 19/4
    /// - "-0.001" -> -1/1000
    /// - "6/-8" -> -3/4
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || NumericError::InvalidInput(s.to_string());

        if let Some((numerator, denominator)) = s.split_once('/') {
            let numerator = parse_integer(numerator.trim()).ok_or_else(invalid)?;
            let denominator = parse_integer(denominator.trim()).ok_or_else(invalid)?;
            return Self::new(numerator, denominator);
        }

        parse_decimal(s).ok_or_else(invalid)
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<i32> for Rational {
    fn from(value: i32) -> Self {
        Self::from_integer(value)
    }
}

impl From<u64> for Rational {
    fn from(value: u64) -> Self {
        Self::from_integer(value)
    }
}

/// Decomposes the decimal into mantissa and power-of-ten scale; exact.
impl From<rust_decimal::Decimal> for Rational {
    fn from(value: rust_decimal::Decimal) -> Self {
        Self::from_scaled(BigInt::from(value.mantissa()), value.scale())
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

// ============================================================================
// Ordering
// ============================================================================

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    /// Cross-multiplication; both denominators are positive.
    fn cmp(&self, other: &Self) -> Ordering {
        if self.denominator == other.denominator {
            return self.numerator.cmp(&other.numerator);
        }
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

// ============================================================================
// Operators
// ============================================================================

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $exact:ident) => {
        impl $imp<&Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                self.$exact(rhs)
            }
        }

        impl $imp<Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                self.$exact(&rhs)
            }
        }

        impl $imp<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                self.$exact(rhs)
            }
        }

        impl $imp<Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                self.$exact(&rhs)
            }
        }
    };
}

forward_binop!(Add, add, add_exact);
forward_binop!(Sub, sub, sub_exact);
forward_binop!(Mul, mul, mul_exact);

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, x| acc.add_exact(&x))
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, x| acc.add_exact(x))
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.numerator, self.denominator)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rational {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rational {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64, d: i64) -> Rational {
        Rational::from_ratio(n, d).unwrap()
    }

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn test_canonical_form() {
        let x = r(6, -8);
        assert_eq!(x.numerator(), &big(-3));
        assert_eq!(x.denominator(), &big(4));

        let zero = r(0, -17);
        assert_eq!(zero.numerator(), &big(0));
        assert_eq!(zero.denominator(), &big(1));
        assert_eq!(zero, Rational::zero());
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(Rational::from_ratio(1, 0), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(&r(1, 2) + &r(1, 3), r(5, 6));
        assert_eq!(r(1, 2) - r(1, 3), r(1, 6));
        assert_eq!(r(2, 3) * r(9, 4), r(3, 2));
        assert_eq!(r(2, 3).checked_div(&r(4, 9)).unwrap(), r(3, 2));
        assert_eq!(-r(2, 3), r(-2, 3));
        assert_eq!(r(-2, 3).abs(), r(2, 3));
        assert_eq!(r(7, 3).half(), r(7, 6));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(r(1, 2).checked_div(&Rational::zero()), Err(NumericError::DivisionByZero));
        assert_eq!(Rational::zero().inverse(), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_inverse_moves_sign() {
        let inv = r(-3, 4).inverse().unwrap();
        assert_eq!(inv.numerator(), &big(-4));
        assert_eq!(inv.denominator(), &big(3));
        assert_eq!(r(4, 1).inverse().unwrap(), r(1, 4));
    }

    #[test]
    fn test_comparison() {
        assert!(r(1, 3) < r(1, 2));
        assert!(r(-1, 2) < r(-1, 3));
        assert!(r(2, 4) == r(1, 2));
        assert_eq!(r(1, 3).max(r(2, 7)), r(1, 3));
        assert_eq!(r(5, 2).signum(), 1);
        assert_eq!(r(-5, 2).signum(), -1);
        assert_eq!(Rational::zero().signum(), 0);
    }

    #[test]
    fn test_integer_extraction() {
        let x = r(7, 2);
        assert_eq!(x.floor(), big(3));
        assert_eq!(x.ceil(), big(4));
        assert_eq!(x.truncate(), big(3));
        assert_eq!(x.round_half_up(), big(4));
        assert_eq!(x.round_half_even(), big(4));

        let y = r(-5, 2);
        assert_eq!(y.floor(), big(-3));
        assert_eq!(y.ceil(), big(-2));
        assert_eq!(y.truncate(), big(-2));
        assert_eq!(y.round_half_up(), big(-3));
        assert_eq!(y.round_half_even(), big(-2));
    }

    #[test]
    fn test_to_decimal_with_residual() {
        let x = r(2, 3);
        let rounded = x.to_decimal(2, RoundingMode::HalfUp).unwrap();
        assert_eq!(rounded.value.to_string(), "0.67");
        assert_eq!(rounded.residual, r(-1, 300));
        assert_eq!(rounded.reconstruct(), x);

        let floor = x.to_decimal(2, RoundingMode::Floor).unwrap();
        assert_eq!(floor.value.to_string(), "0.66");
        assert_eq!(floor.residual, r(1, 150));
    }

    #[test]
    fn test_to_decimal_negative_scale() {
        assert_eq!(
            r(1, 3).to_decimal(-1, RoundingMode::HalfEven),
            Err(NumericError::InvalidScale(-1))
        );
    }

    #[test]
    fn test_to_decimal_exact() {
        let rounded = r(19, 4).to_decimal(4, RoundingMode::Truncate).unwrap();
        assert_eq!(rounded.value.to_string(), "4.7500");
        assert!(rounded.is_exact());
    }

    #[test]
    fn test_to_significant() {
        let x = r(1000, 3);
        let rounded = x.to_significant(5, RoundingMode::HalfEven).unwrap();
        assert_eq!(rounded.value.to_string(), "333.33");
        assert_eq!(rounded.reconstruct(), x);

        let small = r(1, 3000);
        assert_eq!(
            small.to_significant(2, RoundingMode::HalfUp).unwrap().value.to_string(),
            "0.00033"
        );

        // whole digits beyond the precision are kept
        let large = r(123456, 1);
        assert_eq!(
            large.to_significant(2, RoundingMode::HalfUp).unwrap().value.to_string(),
            "123456"
        );

        // carry into a new leading digit gives up one place
        let carried = "9.996".parse::<Rational>().unwrap().to_significant(3, RoundingMode::HalfUp).unwrap();
        assert_eq!(carried.value.to_string(), "10.0");
        assert_eq!(carried.residual, "-0.004".parse::<Rational>().unwrap());

        let carried = "0.0999".parse::<Rational>().unwrap().to_significant(2, RoundingMode::HalfEven).unwrap();
        assert_eq!(carried.value.to_string(), "0.10");

        // whole-number carry keeps scale zero
        let carried = "99.6".parse::<Rational>().unwrap().to_significant(2, RoundingMode::HalfUp).unwrap();
        assert_eq!(carried.value.to_string(), "100");

        assert_eq!(
            x.to_significant(0, RoundingMode::HalfUp),
            Err(NumericError::InvalidScale(0))
        );
    }

    #[test]
    fn test_decimal_exponent_boundaries() {
        assert_eq!(r(1, 1).decimal_exponent(), 0);
        assert_eq!(r(10, 1).decimal_exponent(), 1);
        assert_eq!(r(99, 10).decimal_exponent(), 0);
        assert_eq!(r(1, 10).decimal_exponent(), -1);
        assert_eq!(r(-1, 11).decimal_exponent(), -2);

        let big = Rational::from_integer(pow10(60));
        assert_eq!(big.decimal_exponent(), 60);
        assert_eq!((&big - &Rational::one()).decimal_exponent(), 59);
        assert_eq!(big.inverse().unwrap().decimal_exponent(), -60);
        assert_eq!(Rational::new(pow10(40) + BigInt::one(), pow10(45)).unwrap().decimal_exponent(), -5);
    }

    #[test]
    fn test_display() {
        assert_eq!(r(4, 1).to_string(), "4");
        assert_eq!(r(1, 4).to_string(), "1/4");
        assert_eq!(r(-1, 4).to_string(), "-1/4");
        assert_eq!(r(1, 3).to_approx_string(4), "~0.3333");
        assert_eq!(r(2, 3).to_approx_string_default(), "~0.6666666667");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("4.75".parse::<Rational>().unwrap(), r(19, 4));
        assert_eq!("-0.001".parse::<Rational>().unwrap(), r(-1, 1000));
        assert_eq!("+42".parse::<Rational>().unwrap(), r(42, 1));
        assert_eq!("1000.00".parse::<Rational>().unwrap(), r(1000, 1));
        assert_eq!("6/-8".parse::<Rational>().unwrap(), r(-3, 4));
        assert_eq!(" 3.95 ".parse::<Rational>().unwrap(), r(79, 20));
    }

    #[test]
    fn test_from_str_invalid() {
        for input in ["", "abc", "1.", ".5", "1.2.3", "1_000", "--1", "1/0x", "1e5"] {
            assert_eq!(
                input.parse::<Rational>(),
                Err(NumericError::InvalidInput(input.to_string())),
                "input {:?}",
                input
            );
        }
        assert_eq!("1/0".parse::<Rational>(), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_from_rust_decimal() {
        let d = rust_decimal::Decimal::new(-12345, 3);
        assert_eq!(Rational::from(d), r(-12345, 1000));

        let back = Rational::from(d).to_rust_decimal(3, RoundingMode::HalfEven).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn test_sum() {
        let parts = vec![r(1, 3), r(1, 3), r(1, 3)];
        let total: Rational = parts.iter().sum();
        assert_eq!(total, Rational::one());
        let total: Rational = parts.into_iter().sum();
        assert_eq!(total, Rational::one());
    }
}

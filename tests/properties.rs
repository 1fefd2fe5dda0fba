//! Property-based tests for the rational engine and the FX layer.
//!
//! - Canonical form of every constructed rational
//! - Decimal conversion reconstructs the input exactly
//! - Inversion is an involution for rates and quotes
//! - Rate composition is associative

use exact_money::prelude::*;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed};
use proptest::prelude::*;
use quickcheck::{quickcheck, TestResult};

/// Strategy for arbitrary rationals with moderately sized parts.
fn rational() -> impl Strategy<Value = Rational> {
    (-1_000_000_000i64..1_000_000_000i64, 1i64..1_000_000i64, any::<bool>()).prop_map(
        |(numerator, denominator, flip)| {
            // Feed negative denominators through the normalizing constructor too
            let denominator = if flip { -denominator } else { denominator };
            Rational::from_ratio(numerator, denominator).unwrap()
        },
    )
}

/// Strategy for positive rates (0.0001 to 10000.0000 plus exact fractions).
fn positive_rate() -> impl Strategy<Value = Rational> {
    prop_oneof![
        (1i64..100_000_000i64).prop_map(|v| Rational::from(rust_decimal::Decimal::new(v, 4))),
        (1i64..10_000i64, 1i64..10_000i64).prop_map(|(n, d)| Rational::from_ratio(n, d).unwrap()),
    ]
}

/// Strategy for a valid bid/ask pair.
fn bid_ask() -> impl Strategy<Value = (Rational, Rational)> {
    (positive_rate(), 0i64..1_000i64).prop_map(|(bid, spread_bps)| {
        let ask = &bid + &(&bid * &Rational::from_ratio(spread_bps, 10_000).unwrap());
        (bid, ask)
    })
}

fn rounding_mode() -> impl Strategy<Value = RoundingMode> {
    prop::sample::select(RoundingMode::ALL.to_vec())
}

fn pow10(scale: u32) -> BigInt {
    num_traits::pow(BigInt::from(10), scale as usize)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // =========================================================================
    // Rational engine
    // =========================================================================

    #[test]
    fn prop_constructed_rationals_are_canonical(x in rational()) {
        prop_assert!(x.denominator().is_positive());
        prop_assert!(x.numerator().abs().gcd(x.denominator()).is_one());
        if x.is_zero() {
            prop_assert!(x.denominator().is_one());
        }
    }

    #[test]
    fn prop_decimal_round_trip_is_exact(x in rational(), scale in 0i32..12, mode in rounding_mode()) {
        let rounded = x.to_decimal(scale, mode).unwrap();
        prop_assert_eq!(rounded.value.to_rational() + rounded.residual.clone(), x);

        // The residual is always smaller than one unit in the last place
        let ulp = Rational::new(BigInt::one(), pow10(scale as u32)).unwrap();
        prop_assert!(rounded.residual.abs() < ulp);
    }

    #[test]
    fn prop_decimal_string_parses_back(x in rational(), scale in 0u32..8) {
        let rounded = x.round_to_scale(scale, RoundingMode::HalfEven);
        let parsed: Rational = rounded.value.to_string().parse().unwrap();
        prop_assert_eq!(parsed, rounded.value.to_rational());
    }

    #[test]
    fn prop_ordering_agrees_with_subtraction(a in rational(), b in rational()) {
        let difference = &a - &b;
        prop_assert_eq!(a.cmp(&b), difference.signum().cmp(&0));
    }

    #[test]
    fn prop_division_undoes_multiplication(a in rational(), b in positive_rate()) {
        prop_assert_eq!((&a * &b).checked_div(&b).unwrap(), a);
    }

    // =========================================================================
    // FX layer
    // =========================================================================

    #[test]
    fn prop_rate_inversion_is_involution(rate in positive_rate()) {
        let usd_pln = ExchangeRate::new(rate, USD, PLN).unwrap();
        prop_assert_eq!(usd_pln.invert().invert(), usd_pln);
    }

    #[test]
    fn prop_quote_inversion_preserves_order((bid, ask) in bid_ask()) {
        let quote = Quote::new(bid, ask, EUR, CHF).unwrap();
        let inverted = quote.invert();
        prop_assert!(inverted.bid() <= inverted.ask());
        prop_assert_eq!(inverted.invert(), quote);
    }

    #[test]
    fn prop_composition_is_associative(ab in positive_rate(), bc in positive_rate(), cd in positive_rate()) {
        let ab = ExchangeRate::new(ab, EUR, USD).unwrap();
        let bc = ExchangeRate::new(bc, USD, GBP).unwrap();
        let cd = ExchangeRate::new(cd, GBP, JPY).unwrap();

        let left = ab.then(&bc).unwrap().then(&cd).unwrap();
        let right = ab.then(&bc.then(&cd).unwrap()).unwrap();
        prop_assert_eq!(left.rate(), right.rate());
    }

    #[test]
    fn prop_convert_then_invert_restores_amount(amount in rational(), rate in positive_rate()) {
        let rate = ExchangeRate::new(rate, USD, CAD).unwrap();
        let money = Money::new(amount, USD);
        let round_trip = rate.invert().exchange(&rate.exchange(&money).unwrap()).unwrap();
        prop_assert_eq!(round_trip, money);
    }

    #[test]
    fn prop_minor_units_reconstruct(amount in rational(), mode in rounding_mode()) {
        let money = Money::new(amount, BHD);
        let minor = money.to_minor_units(mode);
        prop_assert_eq!(minor.reconstruct(), money);
    }
}

// ============================================================================
// quickcheck
// ============================================================================

fn negation_cancels(numerator: i32, denominator: i32) -> TestResult {
    if denominator == 0 {
        return TestResult::discard();
    }
    let x = Rational::from_ratio(numerator.into(), denominator.into()).unwrap();
    TestResult::from_bool((&x + &-&x).is_zero() && -(-x.clone()) == x)
}

fn inverse_multiplies_to_one(numerator: i32, denominator: i32) -> TestResult {
    if numerator == 0 || denominator == 0 {
        return TestResult::discard();
    }
    let x = Rational::from_ratio(numerator.into(), denominator.into()).unwrap();
    TestResult::from_bool(&x * &x.inverse().unwrap() == Rational::one())
}

#[test]
fn quickcheck_negation_cancels() {
    quickcheck(negation_cancels as fn(i32, i32) -> TestResult);
}

#[test]
fn quickcheck_inverse_multiplies_to_one() {
    quickcheck(inverse_multiplies_to_one as fn(i32, i32) -> TestResult);
}

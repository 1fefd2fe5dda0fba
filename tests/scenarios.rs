//! End-to-end scenarios for money, rates, quotes and valuation.

use exact_money::domain::currency::TYPED_CURRENCIES;
use exact_money::prelude::*;
use rust_decimal::prelude::*;

fn rational(value: &str) -> Rational {
    value.parse().unwrap()
}

// ============================================================================
// Drift
// ============================================================================

#[test]
fn fixed_scale_rounding_drifts_over_a_year() {
    let total = Decimal::new(100_000, 2);
    let mut drift = Decimal::ZERO;

    for _ in 0..365 {
        let share = (total / Decimal::from(3)).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        drift += total - share * Decimal::from(3);
    }

    assert_eq!(drift, Decimal::new(365, 2));
}

#[test]
fn exact_rational_does_not_drift() {
    let total = Money::parse("1000.00", USD).unwrap();
    let three = Rational::from(3);

    let drift: Money<USD> = (0..365)
        .map(|_| {
            let share = total.divide(&three).unwrap();
            &total - &share.multiply(&three)
        })
        .sum();

    assert!(drift.is_zero());
}

#[test]
fn carried_residual_keeps_daily_accrual_exact() {
    // Accrue 1/365 of 1000 USD each day, booking cents and carrying the rest
    let daily = Money::parse("1000", USD)
        .unwrap()
        .divide(&Rational::from(365))
        .unwrap();

    let mut carry = Money::zero(USD);
    let mut booked = Money::zero(USD);
    for _ in 0..365 {
        let due = &daily + &carry;
        let minor = due.to_minor_units(RoundingMode::HalfEven);
        booked = booked + Money::from_minor_units(minor.units, USD);
        carry = minor.residual;
    }

    assert_eq!(booked + carry, Money::parse("1000", USD).unwrap());
}

// ============================================================================
// Rates, quotes and valuation
// ============================================================================

#[test]
fn simple_rate_scenario() {
    let usd_pln = ExchangeRate::new(rational("4.00"), USD, PLN).unwrap();
    let pln = usd_pln.exchange(&Money::parse("1000", USD).unwrap()).unwrap();

    assert_eq!(pln, Money::new(rational("4000"), PLN));
    assert_eq!(usd_pln.invert().rate(), &Rational::from_ratio(1, 4).unwrap());
}

#[test]
fn quote_scenario() {
    let quote = Quote::new(rational("3.95"), rational("4.05"), USD, PLN).unwrap();
    let thousand = Money::parse("1000", USD).unwrap();

    assert_eq!(quote.mid(), rational("4.00"));
    assert_eq!(
        quote.exchange(&thousand, DealtAction::Sell).unwrap(),
        Money::new(rational("3950"), PLN)
    );
    assert_eq!(
        quote.exchange(&thousand, DealtAction::Buy).unwrap(),
        Money::new(rational("4050"), PLN)
    );
    assert_eq!(
        quote.exchange_at_mid(&thousand).unwrap(),
        Money::new(rational("4000"), PLN)
    );
}

#[test]
fn mark_to_market_scenario() {
    let booked = ExchangeRate::new(rational("4"), USD, PLN).unwrap();
    let market = ExchangeRate::new(rational("3.5"), USD, PLN).unwrap();
    let amount = Money::parse("1000", USD).unwrap();

    assert_eq!(
        MarkToMarket::derive(&booked, &market, &amount, DealtAction::Sell).unwrap(),
        Money::new(rational("500"), PLN)
    );
    assert_eq!(
        MarkToMarket::derive(&booked, &market, &amount, DealtAction::Buy).unwrap(),
        Money::new(rational("-500"), PLN)
    );
}

#[test]
fn rate_and_quote_validation() {
    assert!(matches!(
        ExchangeRate::new(rational("-4"), USD, PLN),
        Err(MoneyError::InvalidRate(_))
    ));
    assert!(matches!(
        Quote::new(rational("4.05"), rational("3.95"), USD, PLN),
        Err(MoneyError::InvalidQuote(_))
    ));
}

// ============================================================================
// Currency safety
// ============================================================================

#[test]
fn mismatch_detected_for_every_ordered_pair() {
    for left in TYPED_CURRENCIES {
        for right in TYPED_CURRENCIES {
            if left == right {
                continue;
            }

            let a = Money::new(Rational::one(), AnyCurrency::from(*left));
            let b = Money::new(Rational::one(), AnyCurrency::from(*right));

            assert_eq!(
                a.checked_add(&b),
                Err(MoneyError::CurrencyMismatch {
                    left: left.code().to_string(),
                    right: right.code().to_string(),
                }),
                "{} + {}",
                left,
                right
            );
        }
    }
}

#[test]
fn typed_and_dynamic_amounts_interoperate() {
    let typed = Money::parse("12.50", CHF).unwrap();
    let dynamic = Money::parse("2.50", AnyCurrency::of("CHF").unwrap()).unwrap();

    assert_eq!(typed.checked_add(&dynamic).unwrap(), Money::parse("15", CHF).unwrap());
    assert_eq!(
        dynamic.checked_add(&typed).unwrap().narrow::<CHF>().unwrap(),
        Money::parse("15", CHF).unwrap()
    );
    assert!(matches!(
        dynamic.narrow::<HKD>(),
        Err(MoneyError::CurrencyMismatch { .. })
    ));
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn money_renders_at_currency_precision() {
    assert_eq!(Money::parse("100.00", BHD).unwrap().to_string(), "100.000 BHD");
    assert_eq!(Money::parse("100.00", PLN).unwrap().to_string(), "100.00 PLN");
    assert_eq!(Money::parse("100.00", JPY).unwrap().to_string(), "100 JPY");

    let kwd = Money::parse("1/8", AnyCurrency::of("KWD").unwrap()).unwrap();
    assert_eq!(kwd.to_string(), "0.125 KWD");
}

#[test]
fn rationals_render_plain_and_approximate() {
    assert_eq!(rational("4.00").to_string(), "4");
    assert_eq!(rational("0.75").to_string(), "3/4");
    assert_eq!(Rational::from_ratio(2, 3).unwrap().to_approx_string_default(), "~0.6666666667");
    assert_eq!(Rational::from_ratio(1, 8).unwrap().to_approx_string(2), "~0.12");
}

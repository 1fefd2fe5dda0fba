// ============================================================================
// Basic Usage Example
// ============================================================================

use chrono::NaiveDate;
use exact_money::prelude::*;

fn main() -> Result<(), MoneyError> {
    #[cfg(feature = "logging")]
    exact_money::logging::init_logging();

    println!("=== Exact Money Example ===\n");

    // Exact amounts
    let invoice = Money::parse("1000.00", USD)?;
    let share = invoice.divide(&Rational::from(3))?;
    let rounded = share.to_decimal(RoundingMode::HalfUp);

    println!("Invoice:           {}", invoice);
    println!("One third:         {} (exact {})", share, share.amount());
    println!("Rounding residual: {}", rounded.residual);
    println!("Three thirds:      {}", share.multiply(&Rational::from(3)));

    // Spot rate and its inverse
    println!("\n=== Spot Rate ===");
    let usd_pln = ExchangeRate::parse("4.00", USD, PLN)?;
    println!("{}  inverse {}", usd_pln, usd_pln.invert());
    println!("{} -> {}", invoice, usd_pln.exchange(&invoice)?);

    // Two-way quote
    println!("\n=== Quote ===");
    let quote = Quote::parse("3.95", "4.05", USD, PLN)?;
    println!("{}  mid {}  spread {}", quote, quote.mid(), quote.spread_relative().to_approx_string(4));
    for action in [DealtAction::Sell, DealtAction::Buy] {
        println!("  {} {} -> {}", action, invoice, quote.exchange(&invoice, action)?);
    }
    println!("  MID {} -> {}", invoice, quote.exchange_at_mid(&invoice)?);

    // Forward deal valued against today's market
    println!("\n=== Mark-to-Market ===");
    let value_date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or_default();
    let booked = ForwardRate::parse("4.00", USD, PLN, value_date)?;
    let market = ExchangeRate::parse("3.50", USD, PLN)?;
    let valuation = MarkToMarket::evaluate(&booked, &market, &invoice, DealtAction::Sell)?;
    println!("Booked {}  market {}", booked, market);
    println!(
        "Booked value {}  market value {}  P&L {}",
        valuation.booked_value, valuation.market_value, valuation.value
    );

    // Runtime currencies
    println!("\n=== Runtime Currencies ===");
    let registry = SimpleCurrencyRegistry::with_iso_defaults();
    registry.register(CurrencyDescriptor::new("XBT", 8))?;

    let sats = Money::parse("0.00012345", AnyCurrency::strict("XBT", &registry)?)?;
    println!("{}  ({} minor units)", sats, sats.to_minor_units(RoundingMode::Floor).units);

    let pln = Money::parse("250", AnyCurrency::strict("PLN", &registry)?)?;
    match pln.narrow::<USD>() {
        Ok(usd) => println!("unexpected: {}", usd),
        Err(err) => println!("narrowing PLN to USD: {}", err),
    }

    Ok(())
}

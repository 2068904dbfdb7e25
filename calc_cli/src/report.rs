//! Plain-text rendering of calculation results.

use calc_core::calculations::{
    AgeResult, BmiResult, CalculationOutput, Calculator, EmiResult, FutureValueResult, SipResult,
    StockAverageResult, StockSplitResult, TripResult,
};
use calc_core::format::{format_compact_inr, format_currency};
use calc_core::Settings;

const RULE: &str = "═══════════════════════════════════════";

/// Money and per-share prices, formatted with the configured currency.
struct Money<'a> {
    settings: &'a Settings,
}

impl Money<'_> {
    fn amount(&self, value: f64) -> String {
        self.settings.format_amount(value)
    }

    /// Prices always keep paise
    fn price(&self, value: f64) -> String {
        let digits = self.settings.currency.fraction_digits.max(2);
        format_currency(value, &self.settings.currency.symbol, digits)
    }
}

fn header(calculator: Calculator) {
    println!("{}", RULE);
    println!("  {} RESULTS", calculator.title().to_uppercase());
    println!("{}", RULE);
}

/// Print a result as a labelled report.
pub fn print_output(output: &CalculationOutput, settings: &Settings) {
    let money = Money { settings };
    match output {
        CalculationOutput::StockAverage(r) => print_stock_average(r, &money),
        CalculationOutput::StockSplit(r) => print_stock_split(r, &money),
        CalculationOutput::Emi(r) => print_emi(r, &money),
        CalculationOutput::Sip(r) => print_sip(r, &money),
        CalculationOutput::FutureValue(r) => print_future_value(r, &money),
        CalculationOutput::Trip(r) => print_trip(r, &money),
        CalculationOutput::Age(r) => print_age(r),
        CalculationOutput::Bmi(r) => print_bmi(r),
    }
}

fn print_stock_average(r: &StockAverageResult, money: &Money) {
    header(Calculator::StockAverage);
    for (i, investment) in r.entry_investments.iter().enumerate() {
        println!("  Purchase {}:     {}", i + 1, money.amount(*investment));
    }
    println!("  Total units:    {}", r.total_units);
    println!("  Average price:  {}", money.price(r.average_price));
    println!("  Total amount:   {}", money.amount(r.total_amount));
}

fn print_stock_split(r: &StockSplitResult, money: &Money) {
    header(Calculator::StockSplit);
    println!("  New price:          {}", money.price(r.new_price));
    println!("  Additional shares:  {}", r.additional_shares);
    println!("  Total shares:       {}", r.total_shares);
    println!("  Refund:             {}", money.price(r.refund_amount));
}

fn print_emi(r: &EmiResult, money: &Money) {
    header(Calculator::Emi);
    println!("  Monthly EMI:     {}", money.amount(r.monthly_emi));
    println!("  Total interest:  {}", money.amount(r.total_interest));
    println!("  Total amount:    {}", money.amount(r.total_amount));
    println!();
    println!("  Principal {:.1}% / Interest {:.1}%", r.principal_percent, r.interest_percent);
}

fn print_sip(r: &SipResult, money: &Money) {
    header(Calculator::Sip);
    println!("  Invested amount:  {}", money.amount(r.total_investment));
    println!("  Est. returns:     {}", money.amount(r.total_returns));
    println!("  Total value:      {} ({})", money.amount(r.future_value), format_compact_inr(r.future_value));
    println!();
    println!("  Invested {:.1}% / Returns {:.1}%", r.investment_percent, r.returns_percent);
}

fn print_future_value(r: &FutureValueResult, money: &Money) {
    header(Calculator::FutureValue);
    println!("  Future value:    {}", money.price(r.future_value));
    println!("  Total interest:  {}", money.price(r.total_interest));
    println!();
    println!("  Principal {:.1}% / Interest {:.1}%", r.principal_percent, r.interest_percent);
}

fn print_trip(r: &TripResult, money: &Money) {
    header(Calculator::Trip);
    println!("  Fuel required:    {:.2} L", r.fuel_required);
    println!("  Fuel cost:        {}", money.amount(r.fuel_cost));
    println!("  Other expenses:   {}", money.amount(r.total_additional_expenses));
    println!("  Total trip cost:  {}", money.amount(r.total_trip_cost));
    println!("  Cost per person:  {}", money.amount(r.cost_per_person));
}

fn print_age(r: &AgeResult) {
    header(Calculator::Age);
    println!("  {} years, {} months, {} days", r.years, r.months, r.days);
}

fn print_bmi(r: &BmiResult) {
    header(Calculator::Bmi);
    println!("  BMI:       {:.2}", r.bmi_value);
    println!("  Category:  {}", r.category);
    println!("  Scale:     {:.0}/100", r.scale_position);
    println!();
    println!("  {}", r.message);
    if let Some(advice) = r.category.advice() {
        println!("  {}", advice);
    }
}

/// Print the calculator catalog.
pub fn print_catalog() {
    println!("Available calculators:");
    println!();
    for calculator in Calculator::ALL {
        println!("  {:<14} {:<14} {}", calculator.slug(), calculator.title(), calculator.description());
    }
}

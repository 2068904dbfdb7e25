//! # Calcdeck CLI
//!
//! Command-line front end for the calc_core calculators. Each subcommand
//! fills a calculator input from its flags, runs it and prints a report,
//! or the result as JSON with `--json`.
//!
//! Numeric flags are read as text: anything that does not start with a
//! number counts as 0, and omitted flags take the configured defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};

use calc_core::calculations::{
    AgeInput, BmiInput, CalculationInput, Calculator, EmiInput, FutureValueInput, Gender, SipInput, SipPlan,
    SplitRatio, StockAverageInput, StockEntry, StockSplitInput, TripInput, UnitSystem,
};
use calc_core::parse::{parse_date, parse_number, parse_number_or};
use calc_core::{CalcError, CalcResult, Settings};

mod logging;
mod report;

#[derive(Parser)]
#[command(name = "calcdeck")]
#[command(author = "Calcdeck Contributors")]
#[command(version)]
#[command(about = "Calcdeck - everyday finance and health calculators", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, help = "Enable verbose output", global = true)]
    verbose: bool,

    #[arg(long, help = "Print results as JSON", global = true)]
    json: bool,

    #[arg(long, env = "CALCDECK_CONFIG", help = "Settings file (JSON)", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "List the available calculators")]
    List,

    #[command(about = "Average price across several purchases")]
    StockAverage {
        #[arg(long = "entry", value_name = "UNITS@PRICE", help = "One purchase, e.g. 10@250.5")]
        entries: Vec<String>,
    },

    #[command(about = "Holdings after a stock split")]
    StockSplit {
        #[arg(long, help = "Share price before the split")]
        price: Option<String>,
        #[arg(long, value_name = "NEW:OLD", help = "Split ratio")]
        ratio: Option<String>,
        #[arg(long, help = "Shares owned before the split")]
        shares: Option<String>,
    },

    #[command(about = "Monthly installment on a loan")]
    Emi {
        #[arg(long, help = "Loan amount")]
        principal: Option<String>,
        #[arg(long, help = "Annual interest rate in percent")]
        rate: Option<String>,
        #[arg(long, help = "Tenure in years")]
        years: Option<String>,
    },

    #[command(about = "Future value of a SIP, step-up SIP or lumpsum")]
    Sip {
        #[arg(long, value_enum, default_value_t = SipMode::Sip)]
        mode: SipMode,
        #[arg(long, help = "Monthly investment")]
        amount: Option<String>,
        #[arg(long, help = "Expected annual return in percent")]
        rate: Option<String>,
        #[arg(long, help = "Investment horizon in years")]
        years: Option<String>,
        #[arg(long = "step-up", help = "Yearly increase of the monthly investment in percent")]
        step_up: Option<String>,
        #[arg(long, help = "One-time investment (lumpsum mode)")]
        lumpsum: Option<String>,
    },

    #[command(about = "Compound growth of a single amount")]
    FutureValue {
        #[arg(long, help = "Amount invested today")]
        initial: Option<String>,
        #[arg(long, help = "Annual growth rate in percent")]
        rate: Option<String>,
        #[arg(long, help = "Years to compound")]
        years: Option<String>,
    },

    #[command(about = "Trip cost split per person")]
    Trip {
        #[arg(long, help = "Distance in km")]
        distance: Option<String>,
        #[arg(long, help = "Mileage in km per liter")]
        efficiency: Option<String>,
        #[arg(long = "fuel-cost", help = "Fuel price per liter")]
        fuel_cost: Option<String>,
        #[arg(long, help = "Number of people")]
        people: Option<String>,
        #[arg(long = "expense", value_name = "TYPE=AMOUNT", help = "Extra expense, e.g. Food=500")]
        expenses: Vec<String>,
    },

    #[command(about = "Age in years, months and days")]
    Age {
        #[arg(long, value_name = "YYYY-MM-DD", help = "Date of birth")]
        birth: String,
        #[arg(long, value_name = "YYYY-MM-DD", help = "Age at this date (default: today)")]
        end: Option<String>,
    },

    #[command(about = "Body mass index")]
    Bmi {
        #[arg(long, help = "Height in cm (metric) or inches (imperial)")]
        height: Option<String>,
        #[arg(long, help = "Weight in kg (metric) or pounds (imperial)")]
        weight: Option<String>,
        #[arg(long, value_enum, default_value_t = UnitArg::Metric)]
        unit: UnitArg,
        #[arg(long, value_enum, default_value_t = GenderArg::Male)]
        gender: GenderArg,
        #[arg(long)]
        age: Option<u32>,
    },

    #[command(about = "Evaluate a JSON calculation document")]
    Eval {
        #[arg(long, help = "JSON file holding a tagged calculation input")]
        input: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SipMode {
    Sip,
    StepUp,
    Lumpsum,
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitArg {
    Metric,
    Imperial,
}

impl From<UnitArg> for UnitSystem {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Metric => UnitSystem::Metric,
            UnitArg::Imperial => UnitSystem::Imperial,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(gender: GenderArg) -> Self {
        match gender {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    let settings = load_settings(cli.config.as_deref())?;

    let input = match cli.command {
        Commands::List => {
            print_catalog(cli.json)?;
            return Ok(());
        }
        Commands::Eval { input } => {
            let text = std::fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            CalculationInput::from_json(&text)
                .with_context(|| format!("Invalid calculation document {}", input.display()))?
        }
        command => match build_input(command, &settings) {
            Ok(input) => input,
            Err(e) => return Err(report_error(e, cli.json)),
        },
    };

    tracing::info!(calculator = input.calculator().slug(), "running calculator");
    let output = match input.evaluate() {
        Ok(output) => output,
        Err(e) => return Err(report_error(e, cli.json)),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        report::print_output(&output, &settings);
    }

    Ok(())
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let settings = Settings::from_json(&text)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

/// Print the error as JSON when asked, then hand it to anyhow for the exit status.
fn report_error(error: CalcError, json: bool) -> anyhow::Error {
    if json {
        if let Ok(body) = serde_json::to_string_pretty(&error) {
            println!("{}", body);
        }
    }
    anyhow::Error::new(error).context("Calculation failed")
}

fn print_catalog(json: bool) -> Result<()> {
    if json {
        let catalog: Vec<_> = Calculator::ALL
            .iter()
            .map(|c| {
                serde_json::json!({
                    "slug": c.slug(),
                    "title": c.title(),
                    "description": c.description(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else {
        report::print_catalog();
    }
    Ok(())
}

fn number(flag: &Option<String>, default: f64) -> f64 {
    parse_number_or(flag.as_deref(), default)
}

/// Turn a calculator subcommand into a tagged input.
fn build_input(command: Commands, settings: &Settings) -> CalcResult<CalculationInput> {
    let defaults = &settings.defaults;

    let input = match command {
        Commands::StockAverage { entries } => {
            let input = if entries.is_empty() {
                StockAverageInput::default()
            } else {
                let entries = entries
                    .iter()
                    .map(|e| parse_entry(e))
                    .collect::<CalcResult<Vec<_>>>()?;
                StockAverageInput { entries }
            };
            CalculationInput::StockAverage(input)
        }
        Commands::StockSplit { price, ratio, shares } => {
            let d = &defaults.stock_split;
            let ratio = ratio.as_deref().unwrap_or(&d.split_ratio);
            CalculationInput::StockSplit(StockSplitInput {
                current_price: number(&price, d.current_price),
                split_ratio: ratio.parse::<SplitRatio>()?,
                shares_owned: number(&shares, d.shares_owned),
            })
        }
        Commands::Emi { principal, rate, years } => {
            let d = &defaults.emi;
            CalculationInput::Emi(EmiInput {
                principal: number(&principal, d.principal),
                annual_rate_percent: number(&rate, d.annual_rate_percent),
                years: number(&years, d.years),
            })
        }
        Commands::Sip {
            mode,
            amount,
            rate,
            years,
            step_up,
            lumpsum,
        } => {
            let d = &defaults.sip;
            let monthly_amount = number(&amount, d.monthly_amount);
            let plan = match mode {
                SipMode::Sip => SipPlan::Sip { monthly_amount },
                SipMode::StepUp => SipPlan::StepUp {
                    monthly_amount,
                    step_up_rate_percent: number(&step_up, d.step_up_rate_percent),
                },
                SipMode::Lumpsum => SipPlan::Lumpsum {
                    amount: number(&lumpsum, d.lumpsum_amount),
                },
            };
            CalculationInput::Sip(SipInput {
                annual_rate_percent: number(&rate, d.annual_rate_percent),
                years: number(&years, d.years),
                plan,
            })
        }
        Commands::FutureValue { initial, rate, years } => {
            let d = &defaults.future_value;
            CalculationInput::FutureValue(FutureValueInput {
                initial_amount: number(&initial, d.initial_amount),
                annual_rate_percent: number(&rate, d.annual_rate_percent),
                years: number(&years, d.years),
            })
        }
        Commands::Trip {
            distance,
            efficiency,
            fuel_cost,
            people,
            expenses,
        } => {
            let d = &defaults.trip;
            let mut input = TripInput::new(
                number(&distance, d.distance_km),
                number(&efficiency, d.fuel_efficiency_kmpl),
                number(&fuel_cost, d.fuel_cost_per_liter),
                number(&people, d.people_count),
            );
            for expense in &expenses {
                let (kind, amount) = expense.split_once('=').ok_or_else(|| {
                    CalcError::invalid_input("expense", expense.as_str(), "Expected TYPE=AMOUNT")
                })?;
                input.add_expense(kind.trim(), parse_number(amount))?;
            }
            CalculationInput::Trip(input)
        }
        Commands::Age { birth, end } => {
            let birth_date = parse_date("birth_date", &birth)?;
            let end_date = match end {
                Some(end) => parse_date("end_date", &end)?,
                None => Local::now().date_naive(),
            };
            CalculationInput::Age(AgeInput { birth_date, end_date })
        }
        Commands::Bmi {
            height,
            weight,
            unit,
            gender,
            age,
        } => {
            let d = &defaults.bmi;
            let unit = UnitSystem::from(unit);
            // Configured defaults are metric
            let (default_height, default_weight) = calc_core::calculations::bmi::convert_measurements(
                d.height_cm,
                d.weight_kg,
                UnitSystem::Metric,
                unit,
            );
            CalculationInput::Bmi(BmiInput {
                gender: gender.into(),
                age: age.or(Some(d.age)),
                height: number(&height, default_height),
                weight: number(&weight, default_weight),
                unit,
            })
        }
        Commands::List | Commands::Eval { .. } => {
            return Err(CalcError::Internal {
                message: "subcommand has no calculator input".to_string(),
            })
        }
    };

    Ok(input)
}

/// Parse one `UNITS@PRICE` purchase.
fn parse_entry(text: &str) -> CalcResult<StockEntry> {
    let (units, price) = text
        .split_once('@')
        .ok_or_else(|| CalcError::invalid_input("entry", text, "Expected UNITS@PRICE"))?;
    Ok(StockEntry::new(parse_number(units), parse_number(price)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry() {
        assert_eq!(parse_entry("10@250.5").unwrap(), StockEntry::new(10.0, 250.5));
        assert_eq!(parse_entry("abc@12").unwrap(), StockEntry::new(0.0, 12.0));
        assert_eq!(parse_entry("10").unwrap_err().field(), Some("entry"));
    }

    #[test]
    fn test_missing_flags_use_defaults() {
        let settings = Settings::default();
        let input = build_input(
            Commands::Emi {
                principal: None,
                rate: Some("9".to_string()),
                years: None,
            },
            &settings,
        )
        .unwrap();

        match input {
            CalculationInput::Emi(emi) => {
                assert_eq!(emi.principal, 1_000_000.0);
                assert_eq!(emi.annual_rate_percent, 9.0);
                assert_eq!(emi.years, 5.0);
            }
            _ => panic!("expected EMI input"),
        }
    }

    #[test]
    fn test_imperial_bmi_defaults_are_converted() {
        let input = build_input(
            Commands::Bmi {
                height: None,
                weight: None,
                unit: UnitArg::Imperial,
                gender: GenderArg::Female,
                age: None,
            },
            &Settings::default(),
        )
        .unwrap();

        match input {
            CalculationInput::Bmi(bmi) => {
                assert_eq!((bmi.height, bmi.weight), (68.0, 165.0));
                assert_eq!(bmi.gender, Gender::Female);
                assert_eq!(bmi.age, Some(33));
            }
            _ => panic!("expected BMI input"),
        }
    }

    #[test]
    fn test_bad_expense_is_rejected() {
        let err = build_input(
            Commands::Trip {
                distance: None,
                efficiency: None,
                fuel_cost: None,
                people: None,
                expenses: vec!["Food".to_string()],
            },
            &Settings::default(),
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("expense"));
    }
}

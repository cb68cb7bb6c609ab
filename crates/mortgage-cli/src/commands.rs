use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use mortgage_core::catalog::{MortgageRate, PaymentFrequency, VALID_AMORTIZATION};
use mortgage_core::{format, Mortgage};

use crate::input;
use crate::output;
use crate::OutputFormat;

#[derive(Args)]
pub struct ProcessArgs {
    /// Path to a comma-separated records file; stdin when omitted
    pub file: Option<String>,
}

#[derive(Args)]
pub struct PaymentArgs {
    /// Loan amount
    #[arg(long)]
    pub amount: Decimal,

    /// Rate name, e.g. FIXED_5 (see `mortgage rates`)
    #[arg(long)]
    pub rate: String,

    /// Frequency name: MONTHLY, BI_WEEKLY or WEEKLY
    #[arg(long)]
    pub frequency: String,

    /// Amortization in years: 5, 10, 15, 20, 25 or 30
    #[arg(long)]
    pub amortization: u32,
}

/// Process a records file line by line. A bad line is reported and
/// skipped; only a missing input source aborts the run.
pub fn run_process(
    args: ProcessArgs,
    fmt: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let lines = input::read_lines(args.file.as_deref())?;

    match fmt {
        OutputFormat::Text => {
            for line in lines.iter().filter(|l| !l.trim().is_empty()) {
                match input::parse_record(line) {
                    Ok(mortgage) => println!("{mortgage}"),
                    Err(e) => println!("Data: {} caused: {}", line.trim(), e),
                }
            }
        }
        OutputFormat::Json => {
            let mut records = Vec::new();
            let mut errors = Vec::new();
            for line in lines.iter().filter(|l| !l.trim().is_empty()) {
                match input::parse_record(line) {
                    Ok(mortgage) => records.push(serde_json::to_value(mortgage.summary())?),
                    Err(e) => errors.push(json!({ "line": line.trim(), "error": e })),
                }
            }
            output::print_json(&json!({ "records": records, "errors": errors }));
        }
    }

    Ok(())
}

/// One-shot payment calculation from flags.
pub fn run_payment(
    args: PaymentArgs,
    fmt: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mortgage = Mortgage::new(args.amount, &args.rate, &args.frequency, args.amortization)?;

    match fmt {
        OutputFormat::Text => println!("{mortgage}"),
        OutputFormat::Json => output::print_json(&serde_json::to_value(mortgage.summary())?),
    }

    Ok(())
}

/// List the catalog: posted rates, frequencies, amortization lengths.
pub fn run_rates(fmt: &OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match fmt {
        OutputFormat::Text => {
            println!("Rates:");
            for rate in MortgageRate::ALL {
                println!("  {:<12} {}%", rate.name(), format::percent(rate.annual_rate()));
            }
            println!("Frequencies:");
            for freq in PaymentFrequency::ALL {
                println!("  {:<12} {} payments/year", freq.name(), freq.payments_per_year());
            }
            let years: Vec<String> = VALID_AMORTIZATION.iter().map(u32::to_string).collect();
            println!("Amortization years: {}", years.join(", "));
        }
        OutputFormat::Json => {
            let rates: Vec<Value> = MortgageRate::ALL
                .iter()
                .map(|r| json!({ "name": r.name(), "annual_rate": r.annual_rate() }))
                .collect();
            let frequencies: Vec<Value> = PaymentFrequency::ALL
                .iter()
                .map(|f| json!({ "name": f.name(), "payments_per_year": f.payments_per_year() }))
                .collect();
            output::print_json(&json!({
                "rates": rates,
                "frequencies": frequencies,
                "amortization_years": VALID_AMORTIZATION,
            }));
        }
    }

    Ok(())
}

mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::{PaymentArgs, ProcessArgs};

/// Mortgage record validation and payment calculation
#[derive(Parser)]
#[command(
    name = "mortgage",
    version,
    about = "Validate mortgage records and calculate periodic payments",
    long_about = "Validates mortgage records against the posted rate, payment \
                  frequency and amortization catalog, and calculates fixed \
                  periodic payments with decimal precision. Processes \
                  comma-separated record files line by line, or computes a \
                  single payment from flags."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "text", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a comma-separated records file (amount,rate,frequency,amortization)
    Process(ProcessArgs),
    /// Calculate the payment for a single mortgage
    Payment(PaymentArgs),
    /// List the posted rates, payment frequencies and amortization lengths
    Rates,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = match cli.command {
        Commands::Process(args) => commands::run_process(args, &cli.output),
        Commands::Payment(args) => commands::run_payment(args, &cli.output),
        Commands::Rates => commands::run_rates(&cli.output),
        Commands::Version => {
            println!("mortgage {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "error".red().bold(), e);
        process::exit(1);
    }
}

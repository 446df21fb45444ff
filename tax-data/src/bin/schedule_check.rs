use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tax_core::CurrencyFormat;
use tax_data::BracketScheduleLoader;

/// Validate a bracket schedule CSV file and print the resulting table.
///
/// The CSV file should have the following columns:
/// - label: Display label for the bracket (may be blank)
/// - lower_bound: Where the bracket starts; the first must be 0
/// - upper_bound: Where it ends (empty for the open-ended top bracket)
/// - rate: The marginal tax rate as a decimal (e.g., 0.07)
#[derive(Parser, Debug)]
#[command(name = "tax-schedule-check")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing the bracket schedule
    #[arg(short, long)]
    file: PathBuf,

    /// Currency symbol used when printing bounds
    #[arg(long, default_value = "₦")]
    symbol: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let schedule = BracketScheduleLoader::load_from_path(&args.file)
        .with_context(|| format!("Failed to load schedule: {}", args.file.display()))?;

    let format = CurrencyFormat {
        symbol: args.symbol,
        ..CurrencyFormat::default()
    };

    println!(
        "{} brackets loaded from {}",
        schedule.len(),
        args.file.display()
    );
    for bracket in schedule.brackets() {
        let upper = bracket
            .upper_bound
            .map(|upper| format.format(upper))
            .unwrap_or_else(|| "and above".to_string());
        println!(
            "  {:<20} {:>18} - {:<18} {:>6}%",
            bracket.label,
            format.format(bracket.lower_bound),
            upper,
            (bracket.rate * rust_decimal::Decimal::ONE_HUNDRED).normalize()
        );
    }

    Ok(())
}

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::{Args, Parser};
use tracing::{debug, error, info};

use tax_cli::csv_loader;
use tax_cli::logging::init_logging;
use tax_cli::{AppConfig, EstimateReport, IncomeFormModel};
use tax_core::BracketSchedule;
use tax_core::calculations::TaxEstimator;
use tax_data::BracketScheduleLoader;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Personal income tax estimator.
///
/// Takes annual salary, allowances and deductions, applies the statutory
/// reliefs and the progressive bracket schedule, and prints the tax due
/// with annual and monthly take-home figures.
#[derive(Debug, Parser)]
#[command(name = "tax-estimator", version)]
struct Cli {
    /// TOML config file with rules, currency and logging settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bracket schedule CSV; overrides the config file and the built-in table.
    #[arg(long)]
    brackets: Option<PathBuf>,

    /// Estimate every row of this CSV file instead of the flags below.
    #[arg(long, conflicts_with = "income")]
    input: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `tax_core=trace`. Overrides RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    income: IncomeArgs,
}

/// Annual amounts; each accepts plain numbers or currency text like `₦1,200,000`.
#[derive(Debug, Args)]
#[group(id = "income", multiple = true)]
struct IncomeArgs {
    #[arg(long)]
    basic_salary: Option<String>,
    #[arg(long)]
    housing_allowance: Option<String>,
    #[arg(long)]
    transport_allowance: Option<String>,
    #[arg(long)]
    leave_allowance: Option<String>,
    #[arg(long)]
    meals_allowance: Option<String>,
    #[arg(long)]
    energy_allowance: Option<String>,
    #[arg(long)]
    other_allowances: Option<String>,
    #[arg(long)]
    life_insurance: Option<String>,
    #[arg(long)]
    temp_disability_insurance: Option<String>,
    #[arg(long)]
    perm_disability_insurance: Option<String>,
    #[arg(long)]
    rent_paid: Option<String>,
    /// Manual pension contribution; ignored with `--pension`.
    #[arg(long)]
    pension_contribution: Option<String>,
    /// Compute the pension automatically from basic, housing and transport.
    #[arg(long)]
    pension: bool,
}

impl From<IncomeArgs> for IncomeFormModel {
    fn from(args: IncomeArgs) -> Self {
        Self {
            basic_salary: args.basic_salary.unwrap_or_default(),
            housing_allowance: args.housing_allowance.unwrap_or_default(),
            transport_allowance: args.transport_allowance.unwrap_or_default(),
            leave_allowance: args.leave_allowance.unwrap_or_default(),
            meals_allowance: args.meals_allowance.unwrap_or_default(),
            energy_allowance: args.energy_allowance.unwrap_or_default(),
            other_allowances: args.other_allowances.unwrap_or_default(),
            life_insurance: args.life_insurance.unwrap_or_default(),
            temp_disability_insurance: args.temp_disability_insurance.unwrap_or_default(),
            perm_disability_insurance: args.perm_disability_insurance.unwrap_or_default(),
            rent_paid: args.rent_paid.unwrap_or_default(),
            pension_contribution: args.pension_contribution.unwrap_or_default(),
            pension_enabled: args.pension,
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn load_schedule(
    cli: &Cli,
    config: &AppConfig,
) -> anyhow::Result<BracketSchedule> {
    match cli.brackets.as_ref().or(config.brackets.as_ref()) {
        Some(path) => {
            debug!(path = %path.display(), "loading bracket schedule");
            BracketScheduleLoader::load_from_path(path)
                .with_context(|| format!("failed to load schedule '{}'", path.display()))
        }
        None => Ok(BracketSchedule::default()),
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    init_logging(
        cli.log_level.as_deref(),
        config.logging.level.as_deref(),
        cli.log_file.as_deref().or(config.logging.file.as_deref()),
    )?;

    let schedule = load_schedule(&cli, &config)?;
    let estimator = TaxEstimator::new(&schedule, &config.rules);
    let format = &config.currency;

    if let Some(input) = &cli.input {
        let rows = csv_loader::load_from_file(input, format)
            .with_context(|| format!("failed to read inputs '{}'", input.display()))?;
        info!(rows = rows.len(), "estimating batch");

        for (idx, inputs) in rows.iter().enumerate() {
            let estimate = estimator.estimate(inputs);
            println!("=== Row {} ===", idx + 1);
            println!("{}", EstimateReport::new(&estimate, format));
        }
        return Ok(());
    }

    let mut form = IncomeFormModel::from(cli.income);
    let inputs = match form.validate_for_submit(format) {
        Ok(inputs) => inputs,
        Err(errors) => bail!(errors.join(" ")),
    };

    let estimate = estimator.estimate(&inputs);
    form.apply_net_salary(&estimate.net_salary, format);
    debug!(pension = %form.pension_contribution, locked = form.pension_locked(), "form updated");

    print!("{}", EstimateReport::new(&estimate, format));
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(?error, "estimate failed");
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

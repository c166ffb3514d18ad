use clap::{Parser, Subcommand};
use configuration::{Environment, MAX_PERIODS_AHEAD};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Monthly profit metrics and compound-growth revenue forecasts.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file. Defaults to ./config.toml when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured environment profile.
    #[arg(long, global = true, value_enum)]
    pub environment: Option<Environment>,

    /// Print JSON instead of tables.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Derive profit metrics for a single period.
    Metrics(MetricsArgs),
    /// Project revenue and profit over future periods.
    Forecast(ForecastArgs),
    /// Summarize a JSON file of monthly entries.
    Report(ReportArgs),
}

#[derive(Parser)]
pub struct MetricsArgs {
    /// Revenue for the period.
    #[arg(long, allow_negative_numbers = true)]
    pub revenue: Decimal,

    /// Fixed costs for the period.
    #[arg(long, allow_negative_numbers = true)]
    pub fixed_costs: Decimal,

    /// Variable costs as a percentage of revenue (40 means 40%).
    #[arg(long, allow_negative_numbers = true)]
    pub variable_cost_percent: Decimal,

    /// Calendar month the figures belong to (1-12).
    #[arg(long, requires = "year")]
    pub month: Option<u32>,

    /// Calendar year the figures belong to.
    #[arg(long, requires = "month")]
    pub year: Option<i32>,
}

/// Any value left out falls back to the `[forecast]` section of the configuration.
#[derive(Parser)]
pub struct ForecastArgs {
    /// Revenue of the first projected period.
    #[arg(long, allow_negative_numbers = true)]
    pub base_revenue: Option<Decimal>,

    /// Per-period growth in percent. May be negative.
    #[arg(long, allow_negative_numbers = true)]
    pub growth_rate: Option<Decimal>,

    /// Fixed costs applied to every period.
    #[arg(long, allow_negative_numbers = true)]
    pub fixed_costs: Option<Decimal>,

    /// Variable costs as a percentage of revenue.
    #[arg(long, allow_negative_numbers = true)]
    pub variable_cost_percent: Option<Decimal>,

    /// Number of periods to project. Zero or less projects nothing.
    #[arg(
        long,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(..=i64::from(MAX_PERIODS_AHEAD))
    )]
    pub periods_ahead: Option<i32>,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// JSON file holding an array of
    /// {month, year, revenue, fixed_costs, variable_cost_percent} entries.
    #[arg(long, short)]
    pub input: PathBuf,
}

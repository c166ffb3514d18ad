use analytics::{build_record, compute_metrics, generate_forecast, summarize};
use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands, ForecastArgs, MetricsArgs, ReportArgs};
use configuration::{init_tracing, load_config_from, Config};
use core_types::{Period, PeriodInputs};
use render::{ForecastOutput, MetricsOutput};

mod cli;
mod input;
mod render;

/// The main entry point for the finmodel command-line application.
fn main() -> anyhow::Result<()> {
    // Load FINMODEL__* overrides from a .env file, if there is one.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = load_config_from(cli.config.as_deref(), cli.environment).context("failed to load configuration")?;
    // Held until exit so the file writer, if any, is flushed.
    let _log_guard = init_tracing(&config)?;

    tracing::debug!(app = %config.app.name, version = %config.app.version, "Starting.");

    // Execute the appropriate command
    match cli.command {
        Commands::Metrics(args) => handle_metrics(args, cli.json),
        Commands::Forecast(args) => handle_forecast(args, &config, cli.json),
        Commands::Report(args) => handle_report(args, cli.json),
    }
}

// ==============================================================================
// Command Handlers
// ==============================================================================

/// Computes a single period's metrics.
fn handle_metrics(args: MetricsArgs, json: bool) -> anyhow::Result<()> {
    let period = match (args.year, args.month) {
        (Some(year), Some(month)) => Some(Period::new(year, month)?),
        _ => None,
    };
    let inputs = PeriodInputs {
        revenue: args.revenue,
        fixed_costs: args.fixed_costs,
        variable_cost_percent: args.variable_cost_percent,
    };
    input::warn_if_unusual(&inputs, period);

    let metrics = match period {
        Some(period) => build_record(period, inputs)?.metrics,
        None => compute_metrics(&inputs)?,
    };

    let output = MetricsOutput {
        period,
        inputs: &inputs,
        metrics: metrics.rounded(),
    };
    if json {
        render::print_json(&output)
    } else {
        println!("{}", render::metrics_table(&output));
        Ok(())
    }
}

/// Generates a forecast, filling unspecified parameters from the configuration.
fn handle_forecast(args: ForecastArgs, config: &Config, json: bool) -> anyhow::Result<()> {
    let mut request = config.forecast.to_request();
    if let Some(base_revenue) = args.base_revenue {
        request.base_revenue = base_revenue;
    }
    if let Some(growth_rate) = args.growth_rate {
        request.growth_rate_pct = growth_rate;
    }
    if let Some(fixed_costs) = args.fixed_costs {
        request.fixed_costs = fixed_costs;
    }
    if let Some(variable_cost_percent) = args.variable_cost_percent {
        request.variable_cost_percent = variable_cost_percent;
    }
    if let Some(periods_ahead) = args.periods_ahead {
        request.periods_ahead = periods_ahead;
    }

    input::warn_if_unusual(
        &PeriodInputs {
            revenue: request.base_revenue,
            fixed_costs: request.fixed_costs,
            variable_cost_percent: request.variable_cost_percent,
        },
        None,
    );

    let forecast = generate_forecast(&request).context("failed to generate forecast")?;
    tracing::info!(periods = forecast.len(), "Forecast complete.");

    if json {
        render::print_json(&ForecastOutput {
            request: &request,
            forecast: &forecast,
        })
    } else if forecast.is_empty() {
        println!("No periods to project.");
        Ok(())
    } else {
        println!("{}", render::forecast_table(&forecast));
        Ok(())
    }
}

/// Builds records from an input file and prints them along with their summary.
fn handle_report(args: ReportArgs, json: bool) -> anyhow::Result<()> {
    let records = input::read_entries(&args.input)?
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            entry
                .into_record()
                .with_context(|| format!("entry {} in {}", index + 1, args.input.display()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let summary = summarize(&records).context("cannot build a report")?;
    tracing::info!(data_points = summary.data_points, "Report complete.");

    if json {
        render::print_json(&summary)
    } else {
        println!("{}", render::records_table(&summary.records, summary.best_period));
        println!("{}", render::summary_table(&summary));
        Ok(())
    }
}

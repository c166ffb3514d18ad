use analytics::PeriodSummary;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};
use core_types::{round_money, ForecastPoint, ForecastRequest, Period, PeriodInputs, PeriodMetrics, PeriodRecord};
use rust_decimal::Decimal;
use serde::Serialize;

const RECORD_HEADER: [&str; 9] = [
    "Period",
    "Revenue",
    "Fixed costs",
    "Variable %",
    "Variable costs",
    "Gross profit",
    "Net profit",
    "Margin %",
    "",
];

/// The JSON shape of a single `metrics` result.
#[derive(Serialize)]
pub struct MetricsOutput<'a> {
    #[serde(flatten)]
    pub period: Option<Period>,
    #[serde(flatten)]
    pub inputs: &'a PeriodInputs,
    #[serde(flatten)]
    pub metrics: PeriodMetrics,
}

/// The JSON shape of a `forecast` result.
#[derive(Serialize)]
pub struct ForecastOutput<'a> {
    pub request: &'a ForecastRequest,
    pub forecast: &'a [ForecastPoint],
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn metrics_table(output: &MetricsOutput<'_>) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Metric", "Value"]);
    if let Some(period) = output.period {
        table.add_row(vec![Cell::new("Period"), Cell::new(period).set_alignment(CellAlignment::Right)]);
    }
    let rows = [
        ("Revenue", output.inputs.revenue),
        ("Fixed costs", output.inputs.fixed_costs),
        ("Variable cost %", output.inputs.variable_cost_percent),
        ("Variable costs", output.metrics.variable_costs),
        ("Gross profit", output.metrics.gross_profit),
        ("Net profit", output.metrics.net_profit),
        ("Profit margin %", output.metrics.profit_margin),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), amount(value)]);
    }
    table
}

pub fn forecast_table(forecast: &[ForecastPoint]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Period", "Revenue", "Variable costs", "Gross profit", "Net profit", "Margin %"]);
    for point in forecast {
        table.add_row(vec![
            Cell::new(point.period).set_alignment(CellAlignment::Right),
            amount(point.revenue),
            amount(point.metrics.variable_costs),
            amount(point.metrics.gross_profit),
            amount(point.metrics.net_profit),
            amount(point.metrics.profit_margin),
        ]);
    }
    table
}

/// One row per record, flagging the best period.
pub fn records_table(records: &[PeriodRecord], best_period: Period) -> Table {
    let mut table = new_table();
    table.set_header(RECORD_HEADER.to_vec());
    for record in records {
        let metrics = record.metrics.rounded();
        let marker = if record.period == best_period { "best" } else { "" };
        table.add_row(vec![
            Cell::new(record.period),
            amount(record.inputs.revenue),
            amount(record.inputs.fixed_costs),
            amount(record.inputs.variable_cost_percent),
            amount(metrics.variable_costs),
            amount(metrics.gross_profit),
            amount(metrics.net_profit),
            amount(metrics.profit_margin),
            Cell::new(marker),
        ]);
    }
    table
}

pub fn summary_table(summary: &PeriodSummary) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Summary", "Value"]);
    table.add_row(vec![
        Cell::new("Data points"),
        Cell::new(summary.data_points).set_alignment(CellAlignment::Right),
    ]);
    let rows = [
        ("Total revenue", summary.total_revenue),
        ("Total costs", summary.total_costs),
        ("Total profit", summary.total_profit),
        ("Average margin %", summary.average_profit_margin),
        ("Max profit", summary.max_profit),
        ("Min profit", summary.min_profit),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), amount(value)]);
    }
    table.add_row(vec![
        Cell::new("Best period"),
        Cell::new(summary.best_period).set_alignment(CellAlignment::Right),
    ]);
    table
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn amount(value: Decimal) -> Cell {
    Cell::new(round_money(value)).set_alignment(CellAlignment::Right)
}

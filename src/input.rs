use anyhow::Context;
use core_types::{Period, PeriodInputs, PeriodRecord};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One month's raw figures as they appear in a report input file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PeriodEntry {
    pub month: u32,
    pub year: i32,
    pub revenue: Decimal,
    pub fixed_costs: Decimal,
    pub variable_cost_percent: Decimal,
}

impl PeriodEntry {
    /// Validates the calendar period and derives the record's metrics.
    pub fn into_record(self) -> anyhow::Result<PeriodRecord> {
        let period = Period::new(self.year, self.month)?;
        let inputs = PeriodInputs {
            revenue: self.revenue,
            fixed_costs: self.fixed_costs,
            variable_cost_percent: self.variable_cost_percent,
        };
        warn_if_unusual(&inputs, Some(period));
        Ok(analytics::build_record(period, inputs)?)
    }
}

/// Reads and parses a JSON array of entries.
pub fn read_entries(path: &Path) -> anyhow::Result<Vec<PeriodEntry>> {
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let entries: Vec<PeriodEntry> =
        serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))?;
    tracing::debug!(entries = entries.len(), path = %path.display(), "Report input loaded.");
    Ok(entries)
}

/// Logs a warning for values outside their conventional range. They are still computed.
pub fn warn_if_unusual(inputs: &PeriodInputs, period: Option<Period>) {
    let period = period.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string());
    if inputs.revenue < Decimal::ZERO {
        tracing::warn!(%period, revenue = %inputs.revenue, "Negative revenue.");
    }
    if inputs.fixed_costs < Decimal::ZERO {
        tracing::warn!(%period, fixed_costs = %inputs.fixed_costs, "Negative fixed costs.");
    }
    if inputs.variable_cost_percent < Decimal::ZERO || inputs.variable_cost_percent > Decimal::ONE_HUNDRED {
        tracing::warn!(
            %period,
            variable_cost_percent = %inputs.variable_cost_percent,
            "Variable cost percentage outside 0-100."
        );
    }
}

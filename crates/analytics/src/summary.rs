use crate::error::AnalyticsError;
use core_types::{round_money, Period, PeriodRecord};
use rust_decimal::Decimal;
use serde::Serialize;

/// Aggregate figures across a set of period records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSummary {
    pub data_points: usize,
    pub total_revenue: Decimal,
    /// Fixed plus variable costs over every period.
    pub total_costs: Decimal,
    pub total_profit: Decimal,
    pub average_profit_margin: Decimal,
    pub max_profit: Decimal,
    pub min_profit: Decimal,
    /// The period with the highest net profit. The earliest one wins a tie.
    pub best_period: Period,
    /// The input records in chronological order, with metrics at two decimal places.
    pub records: Vec<PeriodRecord>,
}

/// Summarizes period records, which may arrive in any order.
///
/// Each record's metrics are first rounded to two decimal places, the precision
/// records are kept at, so the totals are the sums of the figures shown per row.
///
/// # Errors
///
/// `AnalyticsError::NotEnoughData` if `records` is empty, and
/// `AnalyticsError::Overflow` if a total leaves the `Decimal` range.
pub fn summarize(records: &[PeriodRecord]) -> Result<PeriodSummary, AnalyticsError> {
    if records.is_empty() {
        return Err(AnalyticsError::NotEnoughData(
            "at least one period record is required for a summary".to_string(),
        ));
    }

    let mut ordered: Vec<PeriodRecord> = records
        .iter()
        .map(|r| PeriodRecord {
            metrics: r.metrics.rounded(),
            ..r.clone()
        })
        .collect();
    ordered.sort_by_key(|r| r.period);

    let total_revenue = checked_sum(&ordered, "total_revenue", |r| Some(round_money(r.inputs.revenue)))?;
    let total_costs = checked_sum(&ordered, "total_costs", |r| {
        round_money(r.inputs.fixed_costs).checked_add(r.metrics.variable_costs)
    })?;
    let total_profit = checked_sum(&ordered, "total_profit", |r| Some(r.metrics.net_profit))?;
    let total_margin = checked_sum(&ordered, "average_profit_margin", |r| Some(r.metrics.profit_margin))?;
    let average_profit_margin = total_margin / Decimal::from(ordered.len());

    // `ordered` is non-empty, so the first record seeds both extremes.
    let first = &ordered[0];
    let mut best = first;
    let mut min_profit = first.metrics.net_profit;
    for record in &ordered[1..] {
        if record.metrics.net_profit > best.metrics.net_profit {
            best = record;
        }
        min_profit = min_profit.min(record.metrics.net_profit);
    }
    let max_profit = best.metrics.net_profit;
    let best_period = best.period;

    tracing::debug!(data_points = ordered.len(), best_period = %best_period, "Period summary computed.");

    Ok(PeriodSummary {
        data_points: ordered.len(),
        total_revenue: round_money(total_revenue),
        total_costs: round_money(total_costs),
        total_profit: round_money(total_profit),
        average_profit_margin: round_money(average_profit_margin),
        max_profit: round_money(max_profit),
        min_profit: round_money(min_profit),
        best_period,
        records: ordered,
    })
}

fn checked_sum<F>(records: &[PeriodRecord], field: &str, value: F) -> Result<Decimal, AnalyticsError>
where
    F: Fn(&PeriodRecord) -> Option<Decimal>,
{
    records
        .iter()
        .try_fold(Decimal::ZERO, |acc, r| value(r).and_then(|v| acc.checked_add(v)))
        .ok_or_else(|| AnalyticsError::overflow(field))
}

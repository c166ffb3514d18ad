use crate::error::CoreError;
use crate::money::round_money;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The calendar month a period record describes.
///
/// Periods order chronologically: by year, then by month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Creates a period, rejecting months outside 1..=12 and years chrono cannot represent.
    pub fn new(year: i32, month: u32) -> Result<Self, CoreError> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(CoreError::InvalidInput(
                "month".to_string(),
                format!("{month}/{year} is not a valid calendar month"),
            ));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}

/// The raw, caller-supplied figures for one period.
///
/// No range is enforced here: `variable_cost_percent` is conceptually in
/// [0, 100] and amounts are conceptually non-negative, but any value is
/// carried through the formulas unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodInputs {
    pub revenue: Decimal,
    pub fixed_costs: Decimal,
    pub variable_cost_percent: Decimal,
}

/// The figures derived from a `PeriodInputs`. Always computed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodMetrics {
    pub variable_costs: Decimal,
    pub gross_profit: Decimal,
    pub net_profit: Decimal,
    /// Net profit as a percentage of revenue; zero when revenue is not positive.
    pub profit_margin: Decimal,
}

impl PeriodMetrics {
    /// Every field rounded to two decimal places, the precision records are presented at.
    pub fn rounded(&self) -> Self {
        Self {
            variable_costs: round_money(self.variable_costs),
            gross_profit: round_money(self.gross_profit),
            net_profit: round_money(self.net_profit),
            profit_margin: round_money(self.profit_margin),
        }
    }
}

/// One month's inputs together with the metrics derived from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodRecord {
    #[serde(flatten)]
    pub period: Period,
    #[serde(flatten)]
    pub inputs: PeriodInputs,
    #[serde(flatten)]
    pub metrics: PeriodMetrics,
}

/// Parameters of a compound-growth revenue projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub base_revenue: Decimal,
    /// Per-period growth in percent. Negative values project shrinking revenue.
    pub growth_rate_pct: Decimal,
    pub fixed_costs: Decimal,
    pub variable_cost_percent: Decimal,
    /// Number of periods to project. Zero or negative yields an empty forecast.
    pub periods_ahead: i32,
}

/// A single projected period, with every figure rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastPoint {
    /// 1-based index of the projected period.
    pub period: u32,
    pub revenue: Decimal,
    #[serde(flatten)]
    pub metrics: PeriodMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn period_rejects_impossible_month() {
        assert!(Period::new(2024, 0).is_err());
        assert!(Period::new(2024, 13).is_err());
        let err = Period::new(2024, 13).unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidInput("month".to_string(), "13/2024 is not a valid calendar month".to_string())
        );
    }

    #[test]
    fn periods_order_by_year_then_month() {
        let dec_2023 = Period::new(2023, 12).unwrap();
        let jan_2024 = Period::new(2024, 1).unwrap();
        let feb_2024 = Period::new(2024, 2).unwrap();
        assert!(dec_2023 < jan_2024);
        assert!(jan_2024 < feb_2024);
        assert_eq!(jan_2024.to_string(), "01/2024");
    }

    #[test]
    fn rounded_metrics_keep_two_places() {
        let metrics = PeriodMetrics {
            variable_costs: dec!(123.456),
            gross_profit: dec!(876.544),
            net_profit: dec!(-123.455),
            profit_margin: dec!(33.3333333),
        };
        let rounded = metrics.rounded();
        assert_eq!(rounded.variable_costs, dec!(123.46));
        assert_eq!(rounded.gross_profit, dec!(876.54));
        assert_eq!(rounded.net_profit, dec!(-123.46));
        assert_eq!(rounded.profit_margin.to_string(), "33.33");
    }

    #[test]
    fn record_serializes_flat() {
        let record = PeriodRecord {
            period: Period::new(2024, 3).unwrap(),
            inputs: PeriodInputs {
                revenue: dec!(1000.00),
                fixed_costs: dec!(200.00),
                variable_cost_percent: dec!(40.00),
            },
            metrics: PeriodMetrics {
                variable_costs: dec!(400.00),
                gross_profit: dec!(600.00),
                net_profit: dec!(400.00),
                profit_margin: dec!(40.00),
            },
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["month"], 3);
        assert_eq!(json["year"], 2024);
        assert_eq!(json["net_profit"], "400.00");
    }
}

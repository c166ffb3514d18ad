use crate::error::AnalyticsError;
use core_types::{Period, PeriodInputs, PeriodMetrics, PeriodRecord};
use rust_decimal::Decimal;

/// Derives a single period's profit metrics from its raw inputs.
///
/// The steps run in a fixed order:
///
/// 1. `variable_costs = revenue * variable_cost_percent / 100`
/// 2. `gross_profit = revenue - variable_costs`
/// 3. `net_profit = gross_profit - fixed_costs`
/// 4. `profit_margin = net_profit / revenue * 100`, or zero when revenue is not positive
///
/// Inputs are not validated or clamped. The results are exact; use
/// `PeriodMetrics::rounded` for presentation.
///
/// # Errors
///
/// `AnalyticsError::Overflow` if an intermediate value leaves the range `Decimal` can hold.
pub fn compute_metrics(inputs: &PeriodInputs) -> Result<PeriodMetrics, AnalyticsError> {
    let revenue = inputs.revenue;

    let variable_costs = revenue
        .checked_mul(inputs.variable_cost_percent)
        .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
        .ok_or_else(|| AnalyticsError::overflow("variable_costs"))?;

    let gross_profit = revenue
        .checked_sub(variable_costs)
        .ok_or_else(|| AnalyticsError::overflow("gross_profit"))?;

    let net_profit = gross_profit
        .checked_sub(inputs.fixed_costs)
        .ok_or_else(|| AnalyticsError::overflow("net_profit"))?;

    let profit_margin = if revenue > Decimal::ZERO {
        net_profit
            .checked_div(revenue)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .ok_or_else(|| AnalyticsError::overflow("profit_margin"))?
    } else {
        Decimal::ZERO
    };

    Ok(PeriodMetrics {
        variable_costs,
        gross_profit,
        net_profit,
        profit_margin,
    })
}

/// Combines a validated period with its inputs and freshly computed metrics.
pub fn build_record(period: Period, inputs: PeriodInputs) -> Result<PeriodRecord, AnalyticsError> {
    let metrics = compute_metrics(&inputs)?;
    Ok(PeriodRecord {
        period,
        inputs,
        metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn inputs(revenue: Decimal, fixed_costs: Decimal, variable_cost_percent: Decimal) -> PeriodInputs {
        PeriodInputs {
            revenue,
            fixed_costs,
            variable_cost_percent,
        }
    }

    #[test]
    fn derives_all_metrics() {
        let metrics = compute_metrics(&inputs(dec!(100000), dec!(20000), dec!(40))).unwrap();
        assert_eq!(metrics.variable_costs, dec!(40000));
        assert_eq!(metrics.gross_profit, dec!(60000));
        assert_eq!(metrics.net_profit, dec!(40000));
        assert_eq!(metrics.profit_margin, dec!(40));
    }

    #[test]
    fn derived_fields_are_consistent() {
        let cases = [
            (dec!(0), dec!(0), dec!(0)),
            (dec!(1234.56), dec!(789.01), dec!(12.5)),
            (dec!(99999.99), dec!(150000), dec!(100)),
            (dec!(0.01), dec!(0.02), dec!(33.33)),
            (dec!(5000000), dec!(1), dec!(0)),
        ];
        for (revenue, fixed_costs, pct) in cases {
            let metrics = compute_metrics(&inputs(revenue, fixed_costs, pct)).unwrap();
            assert_eq!(metrics.variable_costs + metrics.gross_profit, revenue);
            assert_eq!(metrics.gross_profit - fixed_costs, metrics.net_profit);
        }
    }

    #[test]
    fn zero_revenue_has_zero_margin() {
        let metrics = compute_metrics(&inputs(dec!(0), dec!(5000), dec!(40))).unwrap();
        assert_eq!(metrics.profit_margin, Decimal::ZERO);
        assert_eq!(metrics.net_profit, dec!(-5000));
    }

    #[test]
    fn negative_revenue_has_zero_margin() {
        let metrics = compute_metrics(&inputs(dec!(-100), dec!(0), dec!(10))).unwrap();
        assert_eq!(metrics.variable_costs, dec!(-10));
        assert_eq!(metrics.gross_profit, dec!(-90));
        assert_eq!(metrics.profit_margin, Decimal::ZERO);
    }

    #[test]
    fn out_of_range_percent_propagates() {
        let metrics = compute_metrics(&inputs(dec!(1000), dec!(0), dec!(150))).unwrap();
        assert_eq!(metrics.variable_costs, dec!(1500));
        assert_eq!(metrics.gross_profit, dec!(-500));
        assert_eq!(metrics.profit_margin, dec!(-50));
    }

    #[test]
    fn loss_making_period_has_negative_margin() {
        let metrics = compute_metrics(&inputs(dec!(10000), dec!(8000), dec!(50))).unwrap();
        assert_eq!(metrics.net_profit, dec!(-3000));
        assert_eq!(metrics.profit_margin, dec!(-30));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let input = inputs(dec!(73421.17), dec!(12000.50), dec!(37.25));
        assert_eq!(compute_metrics(&input).unwrap(), compute_metrics(&input).unwrap());
    }

    #[test]
    fn overflow_is_reported_not_panicked() {
        let err = compute_metrics(&inputs(Decimal::MAX, dec!(0), dec!(200))).unwrap_err();
        assert_eq!(err, AnalyticsError::Overflow("variable_costs".to_string()));
    }

    #[test]
    fn build_record_attaches_period() {
        let period = Period::new(2024, 6).unwrap();
        let record = build_record(period, inputs(dec!(2000), dec!(500), dec!(25))).unwrap();
        assert_eq!(record.period, period);
        assert_eq!(record.metrics.net_profit, dec!(1000));
        assert_eq!(record.metrics.profit_margin, dec!(50));
    }
}

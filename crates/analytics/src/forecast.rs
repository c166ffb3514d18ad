use crate::error::AnalyticsError;
use crate::metrics::compute_metrics;
use core_types::{round_money, ForecastPoint, ForecastRequest, PeriodInputs};
use rust_decimal::{Decimal, MathematicalOps};

/// Projects revenue and profit metrics over `request.periods_ahead` periods.
///
/// Period `m` (1-based) has revenue `base_revenue * (1 + growth_rate_pct / 100) ^ (m - 1)`,
/// so the first period is the unmodified base. Each period's growth factor is
/// raised to its power directly rather than accumulated from the previous period.
/// Every output figure is rounded to two decimal places.
///
/// A horizon of zero or less produces an empty forecast. A revenue that has
/// decayed below half a cent is projected as exactly zero, so its margin is zero.
pub fn generate_forecast(request: &ForecastRequest) -> Result<Vec<ForecastPoint>, AnalyticsError> {
    if request.periods_ahead <= 0 {
        return Ok(Vec::new());
    }

    let growth_factor = request
        .growth_rate_pct
        .checked_div(Decimal::ONE_HUNDRED)
        .and_then(|rate| Decimal::ONE.checked_add(rate))
        .ok_or_else(|| AnalyticsError::overflow("growth_factor"))?;

    let forecast = (1..=request.periods_ahead.unsigned_abs())
        .map(|period| project_period(request, growth_factor, period))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        periods = forecast.len(),
        base_revenue = %request.base_revenue,
        growth_rate_pct = %request.growth_rate_pct,
        "Forecast generated."
    );

    Ok(forecast)
}

fn project_period(
    request: &ForecastRequest,
    growth_factor: Decimal,
    period: u32,
) -> Result<ForecastPoint, AnalyticsError> {
    let revenue = growth_factor
        .checked_powi(i64::from(period - 1))
        .and_then(|factor| request.base_revenue.checked_mul(factor))
        .ok_or_else(|| AnalyticsError::overflow("revenue"))?;

    // Below the money scale the margin ratio is meaningless and can leave the Decimal range.
    let rounded_revenue = round_money(revenue);
    let revenue = if rounded_revenue.is_zero() { rounded_revenue } else { revenue };

    let metrics = compute_metrics(&PeriodInputs {
        revenue,
        fixed_costs: request.fixed_costs,
        variable_cost_percent: request.variable_cost_percent,
    })?;

    Ok(ForecastPoint {
        period,
        revenue: rounded_revenue,
        metrics: metrics.rounded(),
    })
}

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept for monetary amounts and percentages.
pub const MONEY_SCALE: u32 = 2;

/// Rounds a value to two decimal places, half away from zero, and pads the
/// scale so that `100000` renders as `100000.00`.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

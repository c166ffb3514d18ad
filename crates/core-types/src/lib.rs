pub mod error;
pub mod money;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use money::{round_money, MONEY_SCALE};
pub use structs::{ForecastPoint, ForecastRequest, Period, PeriodInputs, PeriodMetrics, PeriodRecord};

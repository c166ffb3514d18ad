use core_types::ForecastRequest;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub environment: Environment,
    pub app: AppSettings,
    pub logging: LoggingSettings,
    pub forecast: ForecastDefaults,
}

/// The deployment profile. Each profile carries its own default log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
    Testing,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Testing => "testing",
        }
    }

    /// The `EnvFilter` directive used when neither `RUST_LOG` nor `logging.level` is set.
    pub fn default_log_level(&self) -> &'static str {
        match self {
            Environment::Development => "debug",
            Environment::Production => "info",
            Environment::Testing => "warn",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
}

/// Contains parameters for the tracing subscriber.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// An `EnvFilter` directive such as "info" or "analytics=debug".
    /// Falls back to the environment's default when absent.
    pub level: Option<String>,
    /// When set, log events are also written to a daily rolling file in this directory.
    pub directory: Option<PathBuf>,
    pub file_prefix: String,
}

impl LoggingSettings {
    pub fn effective_level(&self, environment: Environment) -> &str {
        self.level
            .as_deref()
            .unwrap_or_else(|| environment.default_log_level())
    }
}

/// Values used for any forecast parameter the caller leaves out.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastDefaults {
    pub base_revenue: Decimal,
    /// Per-period growth in percent (5 means 5%).
    pub growth_rate_pct: Decimal,
    pub fixed_costs: Decimal,
    pub variable_cost_percent: Decimal,
    pub periods_ahead: i32,
}

impl ForecastDefaults {
    pub fn to_request(&self) -> ForecastRequest {
        ForecastRequest {
            base_revenue: self.base_revenue,
            growth_rate_pct: self.growth_rate_pct,
            fixed_costs: self.fixed_costs,
            variable_cost_percent: self.variable_cost_percent,
            periods_ahead: self.periods_ahead,
        }
    }
}

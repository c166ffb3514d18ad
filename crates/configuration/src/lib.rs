use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{AppSettings, Config, Environment, ForecastDefaults, LoggingSettings};

/// Prefix for environment variable overrides, e.g. `FINMODEL__FORECAST__PERIODS_AHEAD=24`.
pub const ENV_PREFIX: &str = "FINMODEL";

/// The longest forecast horizon accepted from configuration or the command line.
pub const MAX_PERIODS_AHEAD: i32 = 600;

/// Loads the application configuration from the optional `config.toml` file in the
/// working directory, layered over built-in defaults and under `FINMODEL__*` variables.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(None, None)
}

/// Loads the application configuration.
///
/// Sources, lowest priority first: built-in defaults, the TOML file (`path` if
/// given and then required, otherwise an optional `config.toml`), `FINMODEL__*`
/// environment variables, and finally `environment` when the caller forces a profile.
pub fn load_config_from(path: Option<&Path>, environment: Option<Environment>) -> Result<Config, ConfigError> {
    let mut builder = config::Config::builder()
        .set_default("environment", Environment::Development.as_str())?
        .set_default("app.name", "Financial Modelling System")?
        .set_default("app.version", env!("CARGO_PKG_VERSION"))?
        .set_default("logging.file_prefix", "finmodel.log")?
        .set_default("forecast.base_revenue", "100000")?
        .set_default("forecast.growth_rate_pct", "5")?
        .set_default("forecast.fixed_costs", "20000")?
        .set_default("forecast.variable_cost_percent", "40")?
        .set_default("forecast.periods_ahead", 12_i64)?;

    builder = match path {
        Some(path) => builder.add_source(config::File::from(path)),
        None => builder.add_source(config::File::with_name("config.toml").required(false)),
    };

    builder = builder.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__"),
    );

    if let Some(environment) = environment {
        builder = builder.set_override("environment", environment.as_str())?;
    }

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.build()?.try_deserialize::<Config>()?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.app.name.trim().is_empty() {
        return Err(ConfigError::ValidationError("app.name must not be empty".to_string()));
    }
    let periods = config.forecast.periods_ahead;
    if periods <= 0 || periods > MAX_PERIODS_AHEAD {
        return Err(ConfigError::ValidationError(format!(
            "forecast.periods_ahead must be between 1 and {MAX_PERIODS_AHEAD}, got {periods}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn file_values_override_defaults() {
        let file = toml_file(
            r#"
            environment = "production"

            [logging]
            level = "info,analytics=debug"

            [forecast]
            growth_rate_pct = -2.5
            periods_ahead = 24
            "#,
        );
        let config = load_config_from(Some(file.path()), None).unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.logging.effective_level(config.environment), "info,analytics=debug");
        assert_eq!(config.forecast.growth_rate_pct, dec!(-2.5));
        assert_eq!(config.forecast.periods_ahead, 24);
        // Untouched keys keep their defaults.
        assert_eq!(config.forecast.base_revenue, dec!(100000));
        assert_eq!(config.forecast.variable_cost_percent, dec!(40));
    }

    #[test]
    fn defaults_match_the_standard_forecast() {
        let file = toml_file("");
        let config = load_config_from(Some(file.path()), Some(Environment::Testing)).unwrap();
        let request = config.forecast.to_request();

        assert_eq!(config.environment, Environment::Testing);
        assert_eq!(config.logging.effective_level(config.environment), "warn");
        assert!(config.logging.directory.is_none());
        assert_eq!(request.base_revenue, dec!(100000));
        assert_eq!(request.growth_rate_pct, dec!(5));
        assert_eq!(request.fixed_costs, dec!(20000));
        assert_eq!(request.variable_cost_percent, dec!(40));
        assert_eq!(request.periods_ahead, 12);
    }

    #[test]
    fn forced_environment_wins_over_file() {
        let file = toml_file(r#"environment = "production""#);
        let config = load_config_from(Some(file.path()), Some(Environment::Development)).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.logging.effective_level(config.environment), "debug");
    }

    #[test]
    fn rejects_non_positive_horizon() {
        let file = toml_file("[forecast]\nperiods_ahead = 0\n");
        let err = load_config_from(Some(file.path()), None).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn rejects_unknown_environment() {
        let file = toml_file(r#"environment = "staging""#);
        assert!(matches!(load_config_from(Some(file.path()), None), Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let missing = Path::new("/nonexistent/finmodel/config.toml");
        assert!(matches!(load_config_from(Some(missing), None), Err(ConfigError::LoadError(_))));
    }
}

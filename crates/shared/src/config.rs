//! Application configuration management.

use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Aggregation cache configuration.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Report derivation configuration.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_filter() -> String {
    "cashflow=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

/// Aggregation cache configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached aggregations.
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
    /// Time-to-live for a cached aggregation, in seconds.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

fn default_max_capacity() -> u64 {
    64
}

fn default_ttl_secs() -> u64 {
    300 // 5 minutes
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_max_capacity(),
            ttl_secs: default_ttl_secs(),
        }
    }
}

/// Which amount a vertical-analysis share is computed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisBasis {
    /// Share of the column's actual total.
    #[default]
    Actual,
    /// Share of the column's planned total.
    Planned,
}

/// Report derivation configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    /// Basis for vertical-analysis (AV) shares.
    #[serde(default)]
    pub vertical_analysis_basis: AnalysisBasis,
    /// Round derived percentages for display.
    #[serde(default)]
    pub round_for_display: bool,
    /// Currency used when amounts are printed.
    #[serde(default)]
    pub currency: Currency,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("CASHFLOW")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        temp_env::with_vars_unset(
            [
                "CASHFLOW__CACHE__TTL_SECS",
                "CASHFLOW__REPORT__VERTICAL_ANALYSIS_BASIS",
                "RUN_MODE",
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.logging.filter, "cashflow=info");
                assert!(!config.logging.json);
                assert_eq!(config.cache.max_capacity, 64);
                assert_eq!(config.cache.ttl_secs, 300);
                assert_eq!(config.report.vertical_analysis_basis, AnalysisBasis::Actual);
                assert!(!config.report.round_for_display);
                assert_eq!(config.report.currency, Currency::Brl);
            },
        );
    }

    #[test]
    fn test_environment_overrides() {
        temp_env::with_vars(
            [
                ("CASHFLOW__CACHE__TTL_SECS", Some("60")),
                ("CASHFLOW__REPORT__VERTICAL_ANALYSIS_BASIS", Some("planned")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.cache.ttl_secs, 60);
                assert_eq!(config.report.vertical_analysis_basis, AnalysisBasis::Planned);
            },
        );
    }
}

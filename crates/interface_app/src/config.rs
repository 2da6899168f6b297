//! Application configuration

use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Path of the customer directory file
    pub customers_path: String,
    /// Path of the operator directory file
    pub operators_path: String,
    /// Administrator account name
    pub admin_name: String,
    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            customers_path: "customers.txt".to_string(),
            operators_path: "operators.txt".to_string(),
            admin_name: "admin".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from `EBILL_`-prefixed environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("EBILL"))
            .build()?
            .try_deserialize()
    }
}

use serde::Deserialize;
use std::env;

/// Runtime knobs for the booking layer.
#[derive(Debug, Deserialize, Clone)]
pub struct BookingSettings {
    /// Prefix for generated booking codes.
    #[serde(default = "default_code_prefix")]
    pub code_prefix: String,

    /// Optional hard cap on ledger entries. Unbounded when absent.
    #[serde(default)]
    pub ledger_capacity: Option<usize>,
}

fn default_code_prefix() -> String {
    "BK".to_string()
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self {
            code_prefix: default_code_prefix(),
            ledger_capacity: None,
        }
    }
}

impl BookingSettings {
    /// Layered load in the usual order: `config/default`, then the
    /// `RUN_MODE` file, then `TRANSIT__`-prefixed environment variables.
    /// Every source is optional; with none present this is `Default`.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::Environment::with_prefix("TRANSIT").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = BookingSettings::default();
        assert_eq!(settings.code_prefix, "BK");
        assert!(settings.ledger_capacity.is_none());
    }
}

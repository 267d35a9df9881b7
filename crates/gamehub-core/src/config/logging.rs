//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Settings for the tracing subscriber.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level directive, e.g. `info` or `gamehub=debug,info`.
    #[serde(default = "default_level")]
    pub level: String,
    /// Output format: `pretty` for local development, `json` for production.
    #[serde(default = "default_format")]
    pub format: String,
}

impl LoggingConfig {
    /// Whether log lines should be emitted as JSON.
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_check_ignores_case() {
        let config = LoggingConfig {
            level: "info".to_string(),
            format: "JSON".to_string(),
        };
        assert!(config.is_json());
        assert!(!LoggingConfig::default().is_json());
    }
}

//! Server configuration from environment variables

use shared::{DashboardConfig, RefreshIntervals};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?} (expected {expected})")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub dashboard: DashboardConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`; missing variables use defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = RefreshIntervals::default();
        let refresh_secs = |var: &'static str, default: u32| -> Result<u32, ConfigError> {
            match lookup(var) {
                None => Ok(default),
                Some(value) => match value.trim().parse::<u32>() {
                    Ok(secs) if secs > 0 => Ok(secs),
                    _ => Err(ConfigError::Invalid {
                        var,
                        value,
                        expected: "a positive number of seconds",
                    }),
                },
            }
        };

        let refresh = RefreshIntervals {
            weather_secs: refresh_secs("REFRESH_WEATHER_SECS", defaults.weather_secs)?,
            controls_secs: refresh_secs("REFRESH_CONTROLS_SECS", defaults.controls_secs)?,
            sensors_secs: refresh_secs("REFRESH_SENSORS_SECS", defaults.sensors_secs)?,
            spot_price_secs: refresh_secs("REFRESH_SPOT_PRICE_SECS", defaults.spot_price_secs)?,
            train_schedule_secs: refresh_secs(
                "REFRESH_TRAIN_SCHEDULE_SECS",
                defaults.train_schedule_secs,
            )?,
        };

        let port = match lookup("PORT") {
            None => 3000,
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value,
                expected: "a port number",
            })?,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            dashboard: DashboardConfig {
                title: lookup("DASHBOARD_TITLE").unwrap_or_else(|| "Home".to_string()),
                refresh,
            },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.dashboard, DashboardConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DASHBOARD_TITLE", "Cabin"),
            ("REFRESH_SENSORS_SECS", "5"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.dashboard.title, "Cabin");
        assert_eq!(config.dashboard.refresh.sensors_secs, 5);
        assert_eq!(config.dashboard.refresh.weather_secs, 600);
    }

    #[test]
    fn test_invalid_values() {
        let err = config_from(&[("REFRESH_WEATHER_SECS", "0")]).unwrap_err();
        assert!(err.to_string().contains("REFRESH_WEATHER_SECS"));

        let err = config_from(&[("PORT", "http")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}

//! Server configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Listener ===
    /// Interface to bind (e.g., 0.0.0.0).
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP port for the API.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Observability ===
    /// Port for the Prometheus exporter. Disabled when unset.
    #[serde(default)]
    pub metrics_port: Option<u16>,

    /// Log filter (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Emit JSON log lines instead of human-readable text.
    #[serde(default)]
    pub log_json: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            metrics_port: None,
            rust_log: default_log_level(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.host.parse::<IpAddr>().is_err() {
            return Err(format!("HOST must be an IP address, got {:?}", self.host));
        }

        if self.metrics_port == Some(self.port) {
            return Err("METRICS_PORT must differ from PORT".to_string());
        }

        Ok(())
    }

    /// Socket address the API listens on.
    pub fn bind_addr(&self) -> Result<SocketAddr, String> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| format!("HOST must be an IP address, got {:?}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Socket address of the Prometheus exporter, if enabled.
    pub fn metrics_addr(&self) -> Option<SocketAddr> {
        let ip: IpAddr = self.host.parse().ok()?;
        self.metrics_port.map(|port| SocketAddr::new(ip, port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_sensible() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.metrics_port, None);
        assert_eq!(config.rust_log, "info");
        assert!(!config.log_json);
    }

    #[test]
    fn default_binds_all_interfaces_on_8080() {
        let addr = Config::default().bind_addr().unwrap();
        assert_eq!(addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
    }

    #[test]
    fn deserializes_from_env_pairs() {
        let vars = vec![
            ("PORT".to_string(), "9000".to_string()),
            ("METRICS_PORT".to_string(), "9100".to_string()),
            ("LOG_JSON".to_string(), "true".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.metrics_port, Some(9100));
        assert!(config.log_json);
        assert_eq!(
            config.metrics_addr(),
            Some(SocketAddr::from(([0, 0, 0, 0], 9100)))
        );
    }

    #[test]
    fn validate_rejects_hostname() {
        let config = Config {
            host: "localhost".to_string(),
            ..Config::default()
        };

        assert!(config.validate().is_err());
        assert!(config.bind_addr().is_err());
    }

    #[test]
    fn validate_rejects_shared_metrics_port() {
        let config = Config {
            metrics_port: Some(8080),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn metrics_disabled_by_default() {
        assert!(Config::default().metrics_addr().is_none());
    }
}

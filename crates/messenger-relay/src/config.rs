//! Application configuration loaded from environment variables.

use anyhow::{Context, Result};
use secrecy::SecretString;
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Messenger Platform configuration
    pub messenger: MessengerConfig,

    /// Search backend configuration
    pub heimdall: HeimdallConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Bot configuration
    #[serde(default)]
    pub bot: BotConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessengerConfig {
    /// App secret used to sign webhook payloads
    pub app_secret: SecretString,

    /// Token expected in the subscription handshake
    pub validation_token: SecretString,

    /// Page access token for the Send API
    pub page_access_token: SecretString,

    /// Graph API base URL
    #[serde(default = "default_graph_url")]
    pub graph_url: String,

    /// Send API request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeimdallConfig {
    pub api_key: SecretString,

    pub app_id: String,

    /// Results per search
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Search API base URL
    #[serde(default = "default_heimdall_url")]
    pub base_url: String,

    /// Base URL for asset links
    #[serde(default = "default_store_url")]
    pub store_url: String,

    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Command that plain text (no leading `/`) is routed to. Empty disables.
    #[serde(default = "default_command")]
    pub default_command: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default implementations
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            default_command: default_command(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Default value functions
fn default_graph_url() -> String {
    "https://graph.facebook.com/v2.6".into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_page_size() -> usize {
    3
}

fn default_heimdall_url() -> String {
    "https://heimdall.maxdome.de".into()
}

fn default_store_url() -> String {
    "https://www.maxdome.de".into()
}

fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    3000
}

fn default_command() -> String {
    "/mxd-search".into()
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

impl ServerConfig {
    /// Address the server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .listen_addr
            .parse()
            .with_context(|| format!("Invalid listen address {:?}", self.listen_addr))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn minimal() -> serde_json::Value {
        serde_json::json!({
            "messenger": {
                "app_secret": "secret",
                "validation_token": "token",
                "page_access_token": "page"
            },
            "heimdall": {
                "api_key": "key",
                "app_id": "app"
            }
        })
    }

    #[test]
    fn test_defaults() {
        let config: Config = serde_json::from_value(minimal()).unwrap();

        assert_eq!(config.messenger.app_secret.expose_secret(), "secret");
        assert_eq!(config.messenger.graph_url, "https://graph.facebook.com/v2.6");
        assert_eq!(config.messenger.timeout, Duration::from_secs(10));
        assert_eq!(config.heimdall.page_size, 3);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.bot.default_command, "/mxd-search");
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.format, "pretty");
    }

    #[test]
    fn test_overrides() {
        let mut value = minimal();
        value["messenger"]["timeout"] = "250ms".into();
        value["heimdall"]["page_size"] = 10.into();
        value["bot"] = serde_json::json!({ "default_command": "" });

        let config: Config = serde_json::from_value(value).unwrap();

        assert_eq!(config.messenger.timeout, Duration::from_millis(250));
        assert_eq!(config.heimdall.page_size, 10);
        assert!(config.bot.default_command.is_empty());
    }

    #[test]
    fn test_socket_addr() {
        let server = ServerConfig {
            listen_addr: "127.0.0.1".into(),
            port: 8080,
        };
        assert_eq!(
            server.socket_addr().unwrap(),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );

        let server = ServerConfig {
            listen_addr: "::1".into(),
            port: 3000,
        };
        assert_eq!(
            server.socket_addr().unwrap(),
            "[::1]:3000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_invalid_listen_addr_rejected() {
        for listen_addr in ["localhost", "0.0.0.0:3000", "300.1.1.1", ""] {
            let server = ServerConfig {
                listen_addr: listen_addr.into(),
                port: 3000,
            };
            let err = server.socket_addr().unwrap_err();
            assert!(err.to_string().contains("Invalid listen address"), "{}", listen_addr);
        }
    }

    #[test]
    fn test_missing_secrets_rejected() {
        let value = serde_json::json!({ "heimdall": { "api_key": "k", "app_id": "a" } });
        assert!(serde_json::from_value::<Config>(value).is_err());
    }

    #[test]
    fn test_secrets_redacted_in_debug() {
        let config: Config = serde_json::from_value(minimal()).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret\""));
        assert!(!debug.contains("\"page\""));
    }
}

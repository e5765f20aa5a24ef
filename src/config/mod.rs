use serde::Deserialize;
use config::{Config, ConfigError, Environment, File};

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Connection details for the external identity provider.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    #[serde(default)]
    pub api_key: String,
    pub base_url: String,
    pub request_timeout_secs: u64,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with default values
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("database.url", "sqlite://career_findr.db?mode=rwc")?
            .set_default("database.max_connections", 10)?
            .set_default("auth.base_url", "https://identitytoolkit.googleapis.com")?
            .set_default("auth.request_timeout_secs", 10)?

            // Add config file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))

            // Environment variables (CAREER_FINDR__ prefix, double underscore separates levels)
            .add_source(Environment::with_prefix("CAREER_FINDR").separator("__"))

            .build()?;

        config.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: "sqlite://career_findr.db?mode=rwc".to_string(),
                max_connections: 10,
            },
            auth: AuthConfig {
                api_key: String::new(),
                base_url: "https://identitytoolkit.googleapis.com".to_string(),
                request_timeout_secs: 10,
            },
        }
    }
}

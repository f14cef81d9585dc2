use config::{Config, ConfigError, Environment};
use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 5000;

/// Server settings, read from `BUGTRACKER_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    /// `development` turns on error reports in 500 responses.
    pub environment: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("environment", "production")?
            .add_source(Environment::with_prefix("BUGTRACKER"))
            .build()?
            .try_deserialize()
    }

    pub fn development() -> Self {
        Self {
            environment: "development".to_string(),
            ..Self::default()
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            environment: "production".to_string(),
        }
    }
}

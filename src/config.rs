//! Application configuration loaded from environment variables.

use std::env;

/// Development default values.
pub mod defaults {
    pub const DEV_HOST: &str = "127.0.0.1";
    pub const DEV_PORT: u16 = 8080;
    pub const GITHUB_API_URL: &str = crate::services::github::DEFAULT_API_URL;
}

/// Runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Parse environment from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    /// Check if this is a development environment.
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if this is a production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Runtime environment
    pub environment: Environment,
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Base URL of the GitHub REST API, without trailing slash
    pub github_api_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RUST_ENV`: Environment (development/production) - REQUIRED
    /// - `GDI_HOST`: Server host (default: 127.0.0.1)
    /// - `GDI_PORT`: Server port (default: 8080)
    /// - `GDI_GITHUB_API_URL`: GitHub API base URL (default: https://api.github.com)
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_str = env::var("RUST_ENV").map_err(|_| ConfigError::MissingEnvVar("RUST_ENV"))?;

        let environment = Environment::parse(&env_str).ok_or(ConfigError::InvalidValue(
            "RUST_ENV must be 'development' or 'production'",
        ))?;

        let host = env::var("GDI_HOST").unwrap_or_else(|_| defaults::DEV_HOST.to_string());

        let port = env::var("GDI_PORT")
            .unwrap_or_else(|_| defaults::DEV_PORT.to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidValue("GDI_PORT must be a valid port number"))?;

        let github_api_url = env::var("GDI_GITHUB_API_URL")
            .unwrap_or_else(|_| defaults::GITHUB_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if github_api_url.is_empty() {
            return Err(ConfigError::InvalidValue(
                "GDI_GITHUB_API_URL must not be empty",
            ));
        }

        let config = Config {
            environment,
            host,
            port,
            github_api_url,
        };

        if environment.is_production() {
            config.validate_production()?;
        }

        Ok(config)
    }

    /// Validate settings that are only tolerated in development.
    fn validate_production(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !self.github_api_url.starts_with("https://") {
            errors.push(format!(
                "GDI_GITHUB_API_URL '{}' must use https in production.",
                self.github_api_url
            ));
        }

        if !errors.is_empty() {
            return Err(ConfigError::ProductionValidation(errors));
        }

        Ok(())
    }

    /// Get the server bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if running in development mode.
    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(&'static str),

    #[error("Production configuration validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    ProductionValidation(Vec<String>),
}

//! Configuration Module
//!
//! Centralized, environment-driven configuration for the server and the
//! database.

use crate::database::DatabaseConfig;

/// Environment variable helpers
pub mod env {
    use std::env;

    /// Get environment variable as string with default
    pub fn get_string(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    /// Get environment variable as u32 with default
    pub fn get_u32(key: &str, default: u32) -> u32 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get environment variable as u16 with default
    pub fn get_u16(key: &str, default: u16) -> u16 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get environment variable as u64 with default
    pub fn get_u64(key: &str, default: u64) -> u64 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}

/// Application configuration combining all service configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl ServerConfig {
    /// Load server configuration from environment
    pub fn from_env() -> Self {
        Self {
            host: env::get_string("SERVER_HOST", "0.0.0.0"),
            port: env::get_u16("SERVER_PORT", 3000),
            log_level: env::get_string("LOG_LEVEL", "info"),
            cors_origins: parse_origins(&env::get_string("CORS_ORIGINS", "*")),
        }
    }

    /// Socket address string to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether any origin is allowed
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl AppConfig {
    /// Load complete application configuration from environment
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
        }
    }

    /// Validate the complete configuration
    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".into());
        }

        if self.database.url.trim().is_empty() {
            return Err("DATABASE_URL cannot be empty".into());
        }

        if self.database.max_connections == 0 {
            return Err("Database max_connections must be greater than 0".into());
        }

        if self.database.min_connections > self.database.max_connections {
            return Err("Database min_connections cannot be greater than max_connections".into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> AppConfig {
        AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
        }
    }

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert!(config.allows_any_origin());
    }

    #[test]
    fn test_env_helpers() {
        assert_eq!(env::get_u32("NONEXISTENT_U32", 42), 42);
        assert_eq!(env::get_u16("NONEXISTENT_U16", 8080), 8080);
        assert_eq!(env::get_string("NONEXISTENT_STRING", "default"), "default");
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins("https://a.example, https://b.example,"),
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_validate() {
        assert!(valid_config().validate().is_ok());

        let mut config = valid_config();
        config.server.port = 0;
        assert!(config.validate().is_err());

        let mut config = valid_config();
        config.database.min_connections = 10;
        config.database.max_connections = 2;
        assert!(config.validate().is_err());

        let mut config = valid_config();
        config.database.url = " ".to_string();
        assert!(config.validate().is_err());
    }
}

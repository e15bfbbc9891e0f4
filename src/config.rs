//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_MAX_BOARDS, DEFAULT_PENALTY_MINUTES, DEFAULT_SCORED_ACCEPT_THRESHOLD,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};
use crate::scoreboard::ScoringRules;

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub scoring: ScoringConfig,
    pub boards: BoardsConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Scoring configuration
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Penalty minutes per wrong attempt on a solved problem
    pub penalty_minutes: i64,
    /// Best score above which a partial-credit problem displays as accepted
    pub scored_accept_threshold: f64,
}

/// Loaded-board limits
#[derive(Debug, Clone)]
pub struct BoardsConfig {
    /// Maximum number of boards held in memory at once
    pub max_boards: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            scoring: ScoringConfig::from_env()?,
            boards: BoardsConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl ScoringConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let penalty_minutes: i64 = env::var("FROSTBOARD_PENALTY_MINUTES")
            .unwrap_or_else(|_| DEFAULT_PENALTY_MINUTES.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("FROSTBOARD_PENALTY_MINUTES".to_string()))?;
        if penalty_minutes < 0 {
            return Err(ConfigError::InvalidValue(
                "FROSTBOARD_PENALTY_MINUTES".to_string(),
            ));
        }

        Ok(Self {
            penalty_minutes,
            scored_accept_threshold: env::var("FROSTBOARD_SCORED_ACCEPT_THRESHOLD")
                .unwrap_or_else(|_| DEFAULT_SCORED_ACCEPT_THRESHOLD.to_string())
                .parse()
                .map_err(|_| {
                    ConfigError::InvalidValue("FROSTBOARD_SCORED_ACCEPT_THRESHOLD".to_string())
                })?,
        })
    }

    /// Scoring rules handed to every new board
    pub fn rules(&self) -> ScoringRules {
        ScoringRules {
            penalty_minutes: self.penalty_minutes,
            scored_accept_threshold: self.scored_accept_threshold,
        }
    }
}

impl BoardsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            max_boards: env::var("FROSTBOARD_MAX_BOARDS")
                .unwrap_or_else(|_| DEFAULT_MAX_BOARDS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("FROSTBOARD_MAX_BOARDS".to_string()))?,
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Test that defaults are applied when env vars are not set
        let server = ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: "info".to_string(),
        };
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }

    #[test]
    fn test_scoring_rules_conversion() {
        let scoring = ScoringConfig {
            penalty_minutes: 10,
            scored_accept_threshold: 5.0,
        };
        let rules = scoring.rules();
        assert_eq!(rules.penalty_minutes, 10);
        assert_eq!(rules.scored_accept_threshold, 5.0);
    }
}

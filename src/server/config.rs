use std::time::Duration;

use crate::server::{
    error::{config::ConfigError, AppError},
    service::experience::DEFAULT_AWARD_TIMEOUT,
};

const DEFAULT_API_BIND_ADDRESS: &str = "127.0.0.1:8080";

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Address the read-only HTTP API listens on.
    pub api_bind_address: String,
    /// Bound on a single award transaction.
    pub award_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            api_bind_address: std::env::var("API_BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_API_BIND_ADDRESS.to_string()),
            award_timeout: parse_award_timeout(std::env::var("AWARD_TIMEOUT_MS").ok())?,
        })
    }
}

/// Parses `AWARD_TIMEOUT_MS`, falling back to the default when unset.
fn parse_award_timeout(value: Option<String>) -> Result<Duration, ConfigError> {
    let Some(value) = value else {
        return Ok(DEFAULT_AWARD_TIMEOUT);
    };

    match value.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(ConfigError::InvalidEnvVar {
            name: "AWARD_TIMEOUT_MS".to_string(),
            value,
        }),
    }
}

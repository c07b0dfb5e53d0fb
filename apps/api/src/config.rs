use std::str::FromStr;

use anyhow::{ensure, Context, Result};

use crate::matching::scoring::ScoringOptions;

const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; a present but malformed value fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_body_bytes: usize,
    pub scoring: ScoringOptions,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup (the process env in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ScoringOptions::default();

        let config = Config {
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_body_bytes: parse_or(&lookup, "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
            scoring: ScoringOptions {
                min_token_len: parse_or(&lookup, "MIN_TOKEN_LEN", defaults.min_token_len)?,
                jd_top_k: parse_or(&lookup, "JD_TOP_K", defaults.jd_top_k)?,
                resume_top_k: parse_or(&lookup, "RESUME_TOP_K", defaults.resume_top_k)?,
            },
        };

        ensure!(config.scoring.min_token_len >= 1, "MIN_TOKEN_LEN must be at least 1");
        ensure!(config.scoring.jd_top_k >= 1, "JD_TOP_K must be at least 1");
        ensure!(config.scoring.resume_top_k >= 1, "RESUME_TOP_K must be at least 1");
        ensure!(config.max_body_bytes >= 1, "MAX_BODY_BYTES must be at least 1");

        Ok(config)
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

use anyhow::{bail, Context, Result};

use crate::recommend::DEFAULT_LIMIT;

/// Runtime configuration loaded from environment variables.
/// `DATABASE_URL` is the only required variable.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Maximum number of postings returned per student.
    pub recommendation_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            recommendation_limit: parse_limit(std::env::var("RECOMMENDATION_LIMIT").ok())?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_limit(raw: Option<String>) -> Result<usize> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_LIMIT);
    };
    let limit = raw
        .trim()
        .parse::<usize>()
        .context("RECOMMENDATION_LIMIT must be a positive integer")?;
    if limit == 0 {
        bail!("RECOMMENDATION_LIMIT must be greater than zero");
    }
    Ok(limit)
}

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_SESSION_TTL_MINUTES: i64 = 60;
/// One year.
const MAX_SESSION_TTL_MINUTES: i64 = 60 * 24 * 365;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    pub session_ttl_minutes: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(v) => v
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(v) => v
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a positive integer")?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };
        anyhow::ensure!(max_upload_bytes > 0, "MAX_UPLOAD_BYTES must be a positive integer");

        let session_ttl_minutes = match lookup("SESSION_TTL_MINUTES") {
            Some(v) => {
                let minutes = v
                    .parse::<i64>()
                    .context("SESSION_TTL_MINUTES must be an integer")?;
                anyhow::ensure!(
                    (1..=MAX_SESSION_TTL_MINUTES).contains(&minutes),
                    "SESSION_TTL_MINUTES must be between 1 and {MAX_SESSION_TTL_MINUTES}"
                );
                minutes
            }
            None => DEFAULT_SESSION_TTL_MINUTES,
        };

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_upload_bytes,
            session_ttl_minutes,
        })
    }
}

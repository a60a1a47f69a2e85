use std::env;

use anyhow::Context;
use journal_shared::WeekStart;

#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string. Without one the server keeps data in memory.
    pub database_url: Option<String>,
    pub jwt_secret: String,
    /// Lifetime of tokens minted by the CLI, which stand in for a login flow.
    pub jwt_expires_in: i64,
    pub port: u16,
    /// Week start for users who never saved a preference.
    pub default_week_start: WeekStart,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let default_week_start: u8 = env::var("DEFAULT_WEEK_START")
            .unwrap_or_else(|_| "0".to_string()) // Monday
            .parse()
            .context("DEFAULT_WEEK_START must be a number")?;

        Ok(Self {
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            jwt_expires_in: env::var("JWT_EXPIRES_IN")
                .unwrap_or_else(|_| "2592000".to_string()) // 30 days
                .parse()
                .context("JWT_EXPIRES_IN must be a number of seconds")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a valid port number")?,
            default_week_start: WeekStart::new(default_week_start)?,
        })
    }
}

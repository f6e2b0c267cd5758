use anyhow::Context;

const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
    pub seed_database: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .or_else(|| lookup("DB_URI"))
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|| "5".to_string())
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a valid number")?,
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "5555".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            seed_database: lookup("SEED_DATABASE")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        })
    }
}

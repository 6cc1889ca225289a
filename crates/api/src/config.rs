use places_core::place::UpdatePolicy;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite connection URL (default: `sqlite://places.db`).
    pub database_url: String,
    /// Maximum pooled connections (default: `5`).
    pub db_max_connections: u32,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on post-shutdown cleanup in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// How partial updates decide which fields were supplied (default: `truthy`).
    pub update_policy: UpdatePolicy,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `DATABASE_URL`         | `sqlite://places.db`       |
    /// | `DB_MAX_CONNECTIONS`   | `5`                        |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                       |
    /// | `PLACE_UPDATE_POLICY`  | `truthy`                   |
    ///
    /// Panics on unparseable values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");

        let port: u16 = var("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = var("DATABASE_URL", "sqlite://places.db");

        let db_max_connections: u32 = var("DB_MAX_CONNECTIONS", "5")
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = var("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = var("SHUTDOWN_TIMEOUT_SECS", "30")
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let update_policy: UpdatePolicy = var("PLACE_UPDATE_POLICY", "truthy")
            .parse()
            .unwrap_or_else(|e| panic!("PLACE_UPDATE_POLICY: {e}"));

        Self {
            host,
            port,
            database_url,
            db_max_connections,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            update_policy,
        }
    }
}

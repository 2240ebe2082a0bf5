use kwplan_core::workload::DEFAULT_WEEKLY_CAPACITY_HOURS;

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
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// SQLite database URL; the store file is created on first run.
    pub database_url: String,
    /// Weekly capacity threshold for the overload flag (default: `38.5`).
    pub weekly_capacity_hours: f64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                    |
    /// |-------------------------|----------------------------|
    /// | `HOST`                  | `0.0.0.0`                  |
    /// | `PORT`                  | `3000`                     |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                       |
    /// | `DATABASE_URL`          | `sqlite://kwplan.db`       |
    /// | `WEEKLY_CAPACITY_HOURS` | `38.5`                     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://kwplan.db".into());

        let weekly_capacity_hours: f64 = std::env::var("WEEKLY_CAPACITY_HOURS")
            .unwrap_or_else(|_| DEFAULT_WEEKLY_CAPACITY_HOURS.to_string())
            .parse()
            .expect("WEEKLY_CAPACITY_HOURS must be a valid f64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            weekly_capacity_hours,
        }
    }
}

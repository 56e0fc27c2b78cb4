use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        // File-based SQLite by default; DATABASE_URL overrides.
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://pizzeria.db".to_string());
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(5000);
        Ok(Self {
            port,
            database_url,
            host,
        })
    }
}

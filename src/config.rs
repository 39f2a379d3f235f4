use std::path::PathBuf;

use serde::Deserialize;

/// Connection settings for the site database.
#[derive(Debug, Clone, Deserialize)]
pub struct DbConfig {
    pub provider: String,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub db: DbConfig,
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub platform: String,
    pub static_dir: PathBuf,
}

fn var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

impl DbConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            provider: var_or("DB_PROVIDER", "aws"),
            host: var_or("DB_HOST", "localhost"),
            port: std::env::var("DB_PORT")
                .ok()
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(5432),
            user: var_or("DB_USER", "postgres"),
            password: var_or("DB_PASSWORD", ""),
            name: var_or("DB_NAME", "bizsite"),
            max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(10),
        })
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let db = DbConfig::from_env()?;
        let port = var_or("APP_PORT", "8080").parse::<u16>()?;
        Ok(Self {
            db,
            host: var_or("APP_HOST", "0.0.0.0"),
            port,
            environment: var_or("APP_ENV", "development"),
            platform: var_or("PLATFORM", "standalone"),
            static_dir: PathBuf::from(var_or("STATIC_DIR", "dist")),
        })
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            db: DbConfig {
                provider: "aws".into(),
                host: "localhost".into(),
                port: 5432,
                user: "postgres".into(),
                password: String::new(),
                name: "bizsite_test".into(),
                max_connections: 1,
            },
            host: "127.0.0.1".into(),
            port: 0,
            environment: "test".into(),
            platform: "standalone".into(),
            static_dir: PathBuf::from("dist"),
        }
    }
}

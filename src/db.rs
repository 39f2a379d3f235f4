use anyhow::Context;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};

use crate::config::DbConfig;

fn connect_options(config: &DbConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name)
}

/// Opens the process-wide pool. Call once at startup and hand clones around.
pub async fn connect(config: &DbConfig) -> anyhow::Result<PgPool> {
    connect_with(config, config.max_connections).await
}

/// Pool with an explicit size; the operational binaries use a single connection.
pub async fn connect_with(config: &DbConfig, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(connect_options(config))
        .await
        .context("connect to database")?;
    tracing::info!(
        provider = %config.provider,
        host = %config.host,
        database = %config.name,
        max_connections,
        "database pool ready"
    );
    Ok(pool)
}

/// Waits for checked-out connections to come back, then closes the pool.
pub async fn close(pool: PgPool) {
    pool.close().await;
    tracing::info!("database pool closed");
}

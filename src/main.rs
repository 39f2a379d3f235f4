use std::sync::Arc;

use bizsite::{app, config::AppConfig, db, logging, state::AppState, store::PgStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let config = Arc::new(AppConfig::from_env()?);
    let pool = db::connect(&config.db).await?;

    // Run migrations if present
    if let Err(e) = sqlx::migrate!("./migrations").run(&pool).await {
        tracing::warn!(error = %e, "migration failed; continuing");
    }

    let state = AppState::from_parts(config.clone(), Arc::new(PgStore::new(pool.clone())));
    let result = app::serve(app::build_app(state), &config.host, config.port).await;

    db::close(pool).await;
    result
}

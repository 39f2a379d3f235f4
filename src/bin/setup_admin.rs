//! Creates the site's admin user unless it already exists. Safe to re-run.

use bizsite::{
    admin::{ensure_admin, AdminSeed, Outcome},
    config::DbConfig,
    db, logging,
};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    logging::init();

    let code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            error!("admin bootstrap failed: {e:#}");
            1
        }
    };
    std::process::exit(code);
}

async fn run() -> anyhow::Result<()> {
    let config = DbConfig::from_env()?;
    let seed = AdminSeed::from_lookup(|k| std::env::var(k).ok())?;

    let pool = db::connect_with(&config, 1).await?;
    if let Err(e) = sqlx::migrate!("./migrations").run(&pool).await {
        tracing::warn!(error = %e, "migration failed; continuing");
    }

    // close the pool before reporting, whatever the outcome
    let result = ensure_admin(&pool, &seed).await;
    db::close(pool).await;

    match result? {
        Outcome::Created(id) => info!(user_id = id, email = %seed.email, "admin user ready"),
        Outcome::AlreadyExists(id) => info!(user_id = id, email = %seed.email, "nothing to do"),
    }
    Ok(())
}

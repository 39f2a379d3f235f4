//! Points the `.env` file at one of the known database providers.

use std::path::PathBuf;

use clap::Parser;

use bizsite::{logging, provider::run_switch};

#[derive(Parser, Debug)]
#[command(name = "switch_db")]
#[command(about = "Switch the database provider in a .env file", long_about = None)]
struct Args {
    /// Provider to switch to: aws or azure
    #[arg(value_name = "PROVIDER")]
    provider: Option<String>,

    /// Configuration file to rewrite
    #[arg(long, value_name = "PATH", default_value = ".env")]
    file: PathBuf,
}

fn main() {
    dotenvy::dotenv().ok();
    logging::init();
    let args = Args::parse();

    match run_switch(args.provider.as_deref(), &args.file, |k| std::env::var(k).ok()) {
        Ok(creds) => {
            tracing::info!(provider = %creds.provider, database = %creds.database, "done");
        }
        Err(e) => {
            tracing::error!("provider switch failed: {e:#}");
            std::process::exit(1);
        }
    }
}

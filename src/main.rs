use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;

use tracing::info;

use api::{AppConfig, ApplicationServer, Database, Logger, server};

// heap figures in /api/metrics are read back from jemalloc's stats
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

// main function!
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::mark_process_start();

    dotenv().ok();
    let config = Arc::new(AppConfig::parse());

    // guards are kept alive to flush logs and maintain the sentry connection
    let _guards = Logger::init(config.cargo_env, config.sentry_dsn.clone());

    info!(
        "logger and env prepped ({}), building connection pool...",
        config.cargo_env.as_str()
    );

    // lazy on purpose, postgres being down must not stop us from answering probes
    let db = Database::connect_lazy(&config);

    info!("connection pool ok, starting server...");

    ApplicationServer::serve(config, db)
        .await
        .context("i don't feel like serving the api :)")?;

    Ok(())
}

mod app;
mod config;
mod doc;
mod dtos;
mod error;
mod routes;
mod utils;

use crate::{config::Config, utils::shutdown::shutdown_signal};
use anyhow::Context;
use database::db::create_connection;
use log::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env().context("Failed to load configuration")?;

    let db = create_connection(&config.database_url, config.max_connections)
        .await
        .context("Failed to connect to the database")?;

    let app = app::router(db.clone());

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Running axum on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped, closing database connections");
    db.close().await.context("Failed to close the database")?;

    Ok(())
}

mod app;
mod config;
mod cors;
mod error;
mod handlers;
mod models;
mod routes;
mod state;

use std::sync::Arc;

use anyhow::Context;
use config::Config;
use models::Catalog;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("product-catalog-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let catalog = Catalog::default();
    tracing::info!("Catalog loaded with {} products", catalog.products().len());

    let state = AppState {
        catalog: Arc::new(catalog),
    };
    let router = app::build_router(state);

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    axum::serve(listener, router).await?;

    Ok(())
}

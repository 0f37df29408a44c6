mod clients;
mod config;
mod db;
mod dialog;
mod errors;
mod intents;
mod models;
mod pager;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::clients::jobs::IndeedClient;
use crate::clients::ratings::GlassdoorClient;
use crate::clients::summary::SmmryClient;
use crate::config::Config;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::postgres::PgUserStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", crate_target, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Jobba API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and the user record store
    let pool = create_pool(&config.database_url).await?;
    let store = PgUserStore::new(pool);
    store.ensure_schema().await?;
    info!("User record store ready");

    // External data source clients: job search, summarizer, employer ratings
    let jobs = IndeedClient::new(&config);
    let summarizer = SmmryClient::new(&config);
    let ratings = GlassdoorClient::new(&config);
    info!("External data source clients initialized");

    let state = AppState {
        store: Arc::new(store),
        jobs: Arc::new(jobs),
        summarizer: Arc::new(summarizer),
        ratings: Arc::new(ratings),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// SPDX-License-Identifier: MIT

//! FitCheck API Server
//!
//! Stores clothing items and composed outfits in MongoDB and serves the
//! wardrobe endpoints, including the random-outfit shuffle.

use fitcheck_api::{config::Config, db::MongoDb, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting FitCheck API");

    // Initialize the document store client; startup tolerates a missing
    // DATABASE_URL so the /test diagnostic stays reachable.
    let db = MongoDb::connect(&config).await;

    // Build shared state
    let state = Arc::new(AppState { config: config.clone(), db });

    // Build router
    let app = fitcheck_api::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fitcheck_api=debug".parse().expect("valid directive"))
                .add_directive("info".parse().expect("valid directive")),
        )
        .with(format)
        .init();
}

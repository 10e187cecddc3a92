mod config;
mod errors;
mod feeds;
mod models;
mod recommend;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::feeds::jobs::HttpJobsFeed;
use crate::feeds::skills::HttpSkillsFeed;
use crate::recommend::engine::RecommendPolicy;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (panics on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    // One shared HTTP client for both upstream feeds
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()?;

    let skills_feed = Arc::new(HttpSkillsFeed::new(
        client.clone(),
        config.profile_service_url.clone(),
    ));
    let jobs_feed = Arc::new(HttpJobsFeed::new(client, config.jobs_service_url.clone()));
    info!(
        "Feed adapters initialized (profile: {}, jobs: {})",
        config.profile_service_url, config.jobs_service_url
    );

    let policy = RecommendPolicy {
        score_floor: config.score_floor,
        result_cap: config.result_cap,
    };
    info!(
        "Recommendation policy: floor {} / cap {}",
        policy.score_floor, policy.result_cap
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        skills_feed,
        jobs_feed,
        policy,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

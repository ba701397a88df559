//! Shows API
//!
//! # Environment Variables
//!
//! - `HOST`: Server host address (default: `0.0.0.0`)
//! - `PORT`: Server port (default: `8080`)
//! - `SEED_SHOWS`: Start with the default shows (default: `true`)
//! - `RUST_LOG`: Logging level (e.g., `debug`, `shows_api=debug`)

use shows_api::api::{AppState, create_router};
use shows_api::infrastructure::{AppConfig, InMemoryShowRepository};
use shows_api::server::serve;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Starting Shows API");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "Configuration error");
            std::process::exit(1);
        }
    };

    tracing::info!(
        host = %config.host,
        port = config.port,
        seed_shows = config.seed_shows,
        "Configuration loaded"
    );

    let repository = if config.seed_shows {
        InMemoryShowRepository::seeded()
    } else {
        InMemoryShowRepository::new()
    };
    tracing::info!(shows = repository.len(), "Show store initialized");

    let router = create_router(AppState::new(repository));

    serve(router, &config).await
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("shows_api=debug,tower_http=debug,info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}

use std::sync::Arc;

use booking_pricing::{app, config::Config, db, pricing::PgPricingRepository, AppState};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Pricing time zone {}, request timeout {:?}",
        config.time_zone, config.request_timeout
    );

    let pool = db::connect(&config)?;
    let state = AppState::new(
        Arc::new(PgPricingRepository::new(pool)),
        config.time_zone,
        config.request_timeout,
    );
    let router = app(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}

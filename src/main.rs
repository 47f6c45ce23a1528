use anyhow::Result;
use assistant_llm_service::telemetry;
use tracing::Level;
use tracing_subscriber::{Layer, filter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if present.
    dotenvy::dotenv().ok();

    // Library events get the compact telemetry layer; everything else goes
    // through the plain fmt layer, so no event is rendered twice.
    let not_llm_service =
        filter::filter_fn(|meta| !meta.target().starts_with(telemetry::TARGET_PREFIX));

    tracing_subscriber::registry()
        .with(telemetry::env_filter_with_level("info", Level::INFO))
        .with(fmt::layer().with_target(false).with_filter(not_llm_service))
        .with(telemetry::layer())
        .init();

    api::start().await?;

    Ok(())
}

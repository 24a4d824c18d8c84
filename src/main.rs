use gallery0::booter::Booter;
use gallery0::config::Config;
use gallery0::server::build_router;
use gallery0::server::types::AppState;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    let state = Arc::new(AppState::new(
        config.static_assets().map(Path::to_path_buf),
    ));
    let router = build_router(state);

    let booter = Booter::new(config.port).await?;
    tracing::info!(
        production = config.production,
        "gallery server listening on port {}",
        booter.port
    );

    booter.start(router).await
}

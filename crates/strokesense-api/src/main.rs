use tracing_subscriber::EnvFilter;

use strokesense_api::config::ServerConfig;
use strokesense_api::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServerConfig::from_env()?;
    let client = strokesense_bedrock::client::build_client(&config.region).await;
    let app = strokesense_api::router(AppState::new(client, &config));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        model_id = ?config.model_id,
        on_model_failure = ?config.on_model_failure,
        "strokesense api listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

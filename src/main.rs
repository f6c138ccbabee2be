use anyhow::Context;
use rastreio::config::Config;
use rastreio::correios::CorreiosClient;
use rastreio::observability::init_tracing;
use rastreio::routes::create_app;
use rastreio::state::AppState;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env().context("Invalid configuration")?;
    let client = CorreiosClient::new(&config)?;
    let state = AppState::new(Arc::new(client));

    let app = create_app(state, &config.path_prefix);

    #[cfg(feature = "lambda")]
    if rastreio::lambda::is_lambda_runtime() {
        return rastreio::lambda::run(app).await;
    }

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;

    info!(
        "Server running on http://{}{}",
        config.listen_addr, config.path_prefix
    );
    info!("Carrier API: {}", config.correios_api_url);
    info!("Swagger UI: http://{}/swagger-ui/", config.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

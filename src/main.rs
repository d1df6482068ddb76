use anyhow::Context;
use std::sync::Arc;
use storefront_widget::cart::AppState;
use storefront_widget::config::AppConfig;
use storefront_widget::logging::init_tracing;
use storefront_widget::router::create_app_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading any configuration
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_tracing(&config.log_filter);

    // Initialize application state
    let catalog = config.load_catalog().context("failed to load product catalog")?;
    let state = Arc::new(AppState::new(catalog));

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

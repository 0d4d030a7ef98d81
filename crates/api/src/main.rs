use std::sync::Arc;

use anyhow::Context;

use agrireg_api::{app, config::ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    agrireg_observability::init();

    let config = ApiConfig::from_env()?;
    let services = Arc::new(app::services::build_in_memory_services());
    let router = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}

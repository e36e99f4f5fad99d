use std::sync::Arc;

use anyhow::Context;

use dashboard_api::{ApiConfig, DashboardData};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;
    dashboard_observability::init_with(config.log_format);

    let data = DashboardData::placeholder().context("failed to load placeholder dataset")?;
    let app = dashboard_api::app::build_app(Arc::new(data));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vitrine_observability::init();

    let config = vitrine_app::config::AppConfig::from_env();
    let app = vitrine_app::app::build_app(&config.content)?;

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server exited")?;
    Ok(())
}

use std::env;

use anyhow::Result;
use river_api::build_app;
use river_observability::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("river_api");

    let bind = env::var("RIVER_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let app = build_app()?;

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    let catalog = river_core::load();
    tracing::info!(
        bind = %bind,
        locale = catalog.locale.as_code(),
        rivers = catalog.rivers.len(),
        "river levels skill listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

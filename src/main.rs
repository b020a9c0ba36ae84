use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clinic_server::{app, store::Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("CLINIC_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let store = Arc::new(Store::seeded());
    let app = app(store);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Clinic server running on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

use std::sync::Arc;

use checkout_rs::{checkout_router, AppState, Config};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,checkout_rs=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let cfg = Config::from_env()?;
    tracing::info!(
        gateway = %cfg.gateway,
        payu_configured = cfg.payu.is_some(),
        cashfree_configured = cfg.cashfree.is_some(),
        "config loaded"
    );

    if cfg.payu.is_none() && cfg.cashfree.is_none() {
        tracing::warn!("no gateway credentials configured; create-order calls will answer 500");
    }

    let state = Arc::new(AppState::from_config(&cfg)?);

    let app = checkout_router(state).layer(
        CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any),
    );

    let addr = format!("{}:{}", cfg.host, cfg.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Checkout service listening");
    axum::serve(listener, app).await?;

    Ok(())
}

// main.rs
// Axum server wiring: loads settings from the environment, builds the router and serves it.
//
// Endpoints:
// - GET  /           -> built-in page with TOTP/HOTP forms
// - GET  /health     -> liveness probe
// - POST /api/totp   -> {"secret"} -> current time-based code
// - POST /api/hotp   -> {"secret","counter"} -> counter-based code
// - GET  /*          -> static files from PUBLIC_DIR

use anyhow::Context;
use dotenvy::dotenv;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use otpcodes::{routes, state};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = Arc::new(state::init_state().context("failed to load settings")?);
    let settings = &state.settings;
    let listener = TcpListener::bind((settings.host.as_str(), settings.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", settings.host, settings.port))?;

    tracing::info!(
        period = settings.totp_period,
        digits = settings.digits,
        public_dir = %settings.public_dir.display(),
        "listening on http://{}",
        listener.local_addr()?
    );

    let app = routes::app(state.clone());
    axum::serve(listener, app).await?;
    Ok(())
}

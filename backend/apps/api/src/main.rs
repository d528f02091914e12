//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod settings;
mod web;

use axum::{Router, routing::get};
use office::office_router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::settings::Settings;
use crate::web::web_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,office=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;

    match settings.office.server.as_deref() {
        Some(server) => tracing::info!(
            server = %server,
            hostname = %settings.office.hostname,
            signed = settings.office.signing_enabled(),
            "Document server configured"
        ),
        None => tracing::warn!("ONLYOFFICE_SERVER is not set, the editor is disabled"),
    }

    // Build router
    let app = Router::new()
        .nest("/onlyoffice", office_router(settings.office)?)
        .route("/healthcheck", get(healthcheck))
        .fallback_service(web_router(
            settings.web_dir,
            settings.service_worker_version,
        ))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn healthcheck() -> &'static str {
    "OK"
}

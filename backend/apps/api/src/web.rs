//! Static frontend
//!
//! Serves the built frontend from disk. `init.js` boots the UI loader and gets
//! the service worker version stamped in at request time.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
};
use kernel::error::app_error::AppResult;
use tower_http::services::ServeDir;

/// Line of `init.js` replaced with the configured version
pub const SERVICE_WORKER_PLACEHOLDER: &str = "let serviceWorkerVersion = null;";

#[derive(Debug, Clone)]
struct WebState {
    dir: PathBuf,
    service_worker_version: Option<String>,
}

/// Frontend router; meant to be used as the fallback of the main router
pub fn web_router(dir: PathBuf, service_worker_version: Option<String>) -> Router {
    let state = Arc::new(WebState {
        dir: dir.clone(),
        service_worker_version,
    });

    Router::new()
        .route("/init.js", get(init_script))
        .with_state(state)
        .fallback_service(ServeDir::new(dir))
}

async fn init_script(State(state): State<Arc<WebState>>) -> AppResult<impl IntoResponse> {
    let script = tokio::fs::read_to_string(state.dir.join("init.js")).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        stamp_service_worker_version(&script, state.service_worker_version.as_deref()),
    ))
}

/// Replace the `serviceWorkerVersion` placeholder with a quoted version
pub fn stamp_service_worker_version(script: &str, version: Option<&str>) -> String {
    match version {
        Some(version) => {
            // serde_json quoting keeps the version a valid JS string literal
            let quoted = serde_json::Value::from(version).to_string();
            script.replacen(
                SERVICE_WORKER_PLACEHOLDER,
                &format!("let serviceWorkerVersion = {quoted};"),
                1,
            )
        }
        None => script.to_string(),
    }
}

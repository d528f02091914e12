//! Office Router

use crate::application::config::OfficeConfig;
use crate::domain::repository::DocumentTransfer;
use crate::error::OfficeResult;
use crate::infra::http::HttpDocumentTransfer;
use crate::presentation::handlers::{self, OfficeAppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the office router with the HTTP document transfer
pub fn office_router(config: OfficeConfig) -> OfficeResult<Router> {
    let transfer = HttpDocumentTransfer::new(config.transfer_timeout)?;
    Ok(office_router_generic(transfer, config))
}

/// Create an office router for any transfer implementation
pub fn office_router_generic<T>(transfer: T, config: OfficeConfig) -> Router
where
    T: DocumentTransfer + Clone + Send + Sync + 'static,
{
    let state = OfficeAppState {
        transfer: Arc::new(transfer),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::editor_page::<T>))
        .route("/config", get(handlers::editor_config::<T>))
        .route("/save", post(handlers::save_document::<T>))
        .with_state(state)
}

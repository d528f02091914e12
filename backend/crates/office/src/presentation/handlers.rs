//! HTTP Handlers

use axum::Json;
use axum::extract::{Query, RawQuery, State};
use axum::http::{HeaderMap, header};
use axum::response::Html;
use std::sync::Arc;

use crate::application::config::OfficeConfig;
use crate::application::{OpenDocumentUseCase, SaveDocumentInput, SaveDocumentUseCase};
use crate::domain::entities::{EditorConfig, SaveCallback};
use crate::domain::repository::DocumentTransfer;
use crate::domain::services::parse_callback_query;
use crate::error::OfficeResult;
use crate::presentation::dto::{CallbackResponse, OpenDocumentQuery};
use crate::presentation::page::render_editor_page;

/// Shared state for office handlers
#[derive(Clone)]
pub struct OfficeAppState<T>
where
    T: DocumentTransfer + Clone + Send + Sync + 'static,
{
    pub transfer: Arc<T>,
    pub config: Arc<OfficeConfig>,
}

/// GET /onlyoffice
pub async fn editor_page<T>(
    State(state): State<OfficeAppState<T>>,
    Query(query): Query<OpenDocumentQuery>,
) -> OfficeResult<Html<String>>
where
    T: DocumentTransfer + Clone + Send + Sync + 'static,
{
    let use_case = OpenDocumentUseCase::new(state.config.clone());
    let output = use_case.execute(query.into_request())?;

    let page = render_editor_page(&state.config.title, &output)?;
    Ok(Html(page))
}

/// GET /onlyoffice/config
pub async fn editor_config<T>(
    State(state): State<OfficeAppState<T>>,
    Query(query): Query<OpenDocumentQuery>,
) -> OfficeResult<Json<EditorConfig>>
where
    T: DocumentTransfer + Clone + Send + Sync + 'static,
{
    let use_case = OpenDocumentUseCase::new(state.config.clone());
    let output = use_case.execute(query.into_request())?;

    Ok(Json(output.editor_config))
}

/// POST /onlyoffice/save
///
/// `file` and `token` are read from the raw query so they keep the encoding
/// the document URL was built with. `file` may contain unencoded `&`.
pub async fn save_document<T>(
    State(state): State<OfficeAppState<T>>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
    Json(callback): Json<SaveCallback>,
) -> OfficeResult<Json<CallbackResponse>>
where
    T: DocumentTransfer + Clone + Send + Sync + 'static,
{
    let query = query.unwrap_or_default();
    let target = parse_callback_query(&query);

    let input = SaveDocumentInput {
        callback,
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        target_file: target.file.map(str::to_string),
        target_token: target.token.map(str::to_string),
    };

    let use_case = SaveDocumentUseCase::new(state.transfer.clone(), state.config.clone());
    use_case.execute(input).await?;

    Ok(Json(CallbackResponse::ok()))
}

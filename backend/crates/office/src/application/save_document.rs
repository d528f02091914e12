//! Save Document Use Case
//!
//! Handles the document server's save callback: authenticate it, then copy
//! the edited document back to the file server location it was opened from.

use std::sync::Arc;

use platform::jwt;
use url::Url;

use crate::application::config::OfficeConfig;
use crate::domain::entities::{SaveCallback, WrappedCallback};
use crate::domain::repository::DocumentTransfer;
use crate::domain::services::document_url;
use crate::domain::value_objects::CallbackStatus;
use crate::error::{OfficeError, OfficeResult};

/// Input DTO for save document
#[derive(Debug, Clone)]
pub struct SaveDocumentInput {
    pub callback: SaveCallback,
    /// Raw `Authorization` header value
    pub authorization: Option<String>,
    /// `file` query parameter, still percent-encoded
    pub target_file: Option<String>,
    /// `token` query parameter, still percent-encoded
    pub target_token: Option<String>,
}

/// Output DTO for save document
#[derive(Debug, Clone)]
pub struct SaveDocumentOutput {
    pub status: CallbackStatus,
    pub saved: bool,
}

/// Save Document Use Case
pub struct SaveDocumentUseCase<T>
where
    T: DocumentTransfer,
{
    transfer: Arc<T>,
    config: Arc<OfficeConfig>,
}

impl<T> SaveDocumentUseCase<T>
where
    T: DocumentTransfer,
{
    pub fn new(transfer: Arc<T>, config: Arc<OfficeConfig>) -> Self {
        Self { transfer, config }
    }

    pub async fn execute(&self, input: SaveDocumentInput) -> OfficeResult<SaveDocumentOutput> {
        let callback = self.authenticate(&input)?;
        let status = CallbackStatus::from_code(callback.status);

        if status.is_error() {
            tracing::warn!(key = %callback.key, status = callback.status, "Document server reported a save error");
        }

        if !status.requires_save() {
            tracing::debug!(key = %callback.key, status = callback.status, "Callback without document");
            return Ok(SaveDocumentOutput {
                status,
                saved: false,
            });
        }

        let source = callback
            .url
            .as_deref()
            .ok_or_else(|| OfficeError::MissingParameter("url".to_string()))?;
        let source = parse_http_url(source)?;

        let file = input
            .target_file
            .as_deref()
            .ok_or_else(|| OfficeError::MissingParameter("file".to_string()))?;
        let target = parse_http_url(&document_url(file, input.target_token.as_deref()))?;
        self.check_target(&target)?;

        self.transfer.transfer(&source, &target).await?;

        tracing::info!(
            key = %callback.key,
            status = callback.status,
            target = %target.path(),
            "Saved edited document"
        );

        Ok(SaveDocumentOutput {
            status,
            saved: true,
        })
    }

    /// Resolve the callback, verifying its token when signing is enabled
    ///
    /// The token comes either from the body (payload = callback) or from an
    /// `Authorization: Bearer` header (payload = `{"payload": callback}`).
    fn authenticate(&self, input: &SaveDocumentInput) -> OfficeResult<SaveCallback> {
        let Some(secret) = self.config.secret() else {
            return Ok(input.callback.clone());
        };

        if let Some(token) = input.callback.token.as_deref() {
            return jwt::verify::<SaveCallback>(token, secret).map_err(OfficeError::InvalidToken);
        }

        let bearer = input
            .authorization
            .as_deref()
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(OfficeError::MissingToken)?;

        jwt::verify::<WrappedCallback>(bearer, secret)
            .map(|wrapped| wrapped.payload)
            .map_err(OfficeError::InvalidToken)
    }

    fn check_target(&self, target: &Url) -> OfficeResult<()> {
        let Some(domain) = self.config.allowed_domain.as_deref() else {
            return Ok(());
        };

        let host = target.host_str().unwrap_or_default();
        if host_matches(host, domain) {
            Ok(())
        } else {
            Err(OfficeError::TargetNotAllowed(host.to_string()))
        }
    }
}

/// Parse an absolute http(s) URL
fn parse_http_url(raw: &str) -> OfficeResult<Url> {
    let url = Url::parse(raw)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(OfficeError::InvalidUrl(format!("unsupported scheme {other}"))),
    }
}

/// `host` is `domain` or one of its subdomains (case-insensitive)
fn host_matches(host: &str, domain: &str) -> bool {
    let host = host.to_ascii_lowercase();
    let domain = domain.trim_start_matches('.').to_ascii_lowercase();
    !domain.is_empty() && (host == domain || host.ends_with(&format!(".{domain}")))
}

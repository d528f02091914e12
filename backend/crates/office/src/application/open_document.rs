//! Open Document Use Case

use std::sync::Arc;

use platform::jwt::{self, TimedClaims};

use crate::application::config::OfficeConfig;
use crate::domain::entities::{DocumentRequest, EditorConfig};
use crate::domain::services::build_editor_config;
use crate::error::{OfficeError, OfficeResult};

/// Output DTO for open document
#[derive(Debug, Clone)]
pub struct OpenDocumentOutput {
    pub editor_config: EditorConfig,
    /// URL of the document server's `api.js`
    pub docs_api_url: String,
}

/// Open Document Use Case
pub struct OpenDocumentUseCase {
    config: Arc<OfficeConfig>,
}

impl OpenDocumentUseCase {
    pub fn new(config: Arc<OfficeConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, request: DocumentRequest) -> OfficeResult<OpenDocumentOutput> {
        let docs_api_url = self.config.docs_api_url().ok_or(OfficeError::NotConfigured)?;

        let mut editor_config = build_editor_config(&request, self.config.editor_defaults())?;

        if let Some(secret) = self.config.secret() {
            editor_config.token = Some(self.sign(&editor_config, secret)?);
        }

        tracing::info!(
            file = %editor_config.document.title,
            key = %editor_config.document.key,
            mode = %editor_config.editor_config.mode,
            signed = editor_config.is_signed(),
            "Opening document"
        );

        Ok(OpenDocumentOutput {
            editor_config,
            docs_api_url,
        })
    }

    /// Sign the configuration; the JWT payload is the configuration itself
    fn sign(&self, editor_config: &EditorConfig, secret: &[u8]) -> OfficeResult<String> {
        let claims = TimedClaims::new(editor_config.unsigned(), self.config.token_ttl_chrono());
        jwt::sign(&claims, secret)
            .map_err(|e| OfficeError::Internal(format!("failed to sign editor config: {e}")))
    }
}

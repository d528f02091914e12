//! HTTP document transfer (reqwest)

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::domain::repository::DocumentTransfer;
use crate::error::{OfficeError, OfficeResult};

/// Streams documents between servers without buffering them in memory
#[derive(Clone)]
pub struct HttpDocumentTransfer {
    client: reqwest::Client,
}

impl HttpDocumentTransfer {
    pub fn new(timeout: Duration) -> OfficeResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OfficeError::Internal(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

impl DocumentTransfer for HttpDocumentTransfer {
    async fn transfer(&self, source: &Url, target: &Url) -> OfficeResult<()> {
        let response = self
            .client
            .get(source.clone())
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!(
            source = %source,
            content_length = ?response.content_length(),
            "Fetched edited document"
        );

        let content_type = response.headers().get(CONTENT_TYPE).cloned();
        let mut request = self
            .client
            .put(target.clone())
            .body(reqwest::Body::wrap_stream(response.bytes_stream()));
        if let Some(content_type) = content_type {
            request = request.header(CONTENT_TYPE, content_type);
        }

        request.send().await?.error_for_status()?;
        Ok(())
    }
}

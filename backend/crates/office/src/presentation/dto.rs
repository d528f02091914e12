//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entities::DocumentRequest;

/// Query for GET /onlyoffice and GET /onlyoffice/config
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenDocumentQuery {
    pub file: Option<String>,
    #[serde(alias = "share_token")]
    pub token: Option<String>,
    pub user: Option<String>,
    pub mtime: Option<String>,
}

impl OpenDocumentQuery {
    pub const ANONYMOUS: &'static str = "anonymous";

    /// Blank values count as absent
    ///
    /// A missing `mtime` becomes empty, so the cache key then depends on the
    /// file name only.
    pub fn into_request(self) -> DocumentRequest {
        let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        DocumentRequest {
            file: non_blank(self.file).unwrap_or_default(),
            token: non_blank(self.token),
            user: non_blank(self.user).unwrap_or_else(|| Self::ANONYMOUS.to_string()),
            mtime: self.mtime.unwrap_or_default(),
        }
    }
}

/// Response for POST /onlyoffice/save
///
/// The document server only accepts `{"error":0}` as success.
#[derive(Debug, Clone, Serialize)]
pub struct CallbackResponse {
    pub error: u8,
}

impl CallbackResponse {
    pub fn ok() -> Self {
        Self { error: 0 }
    }
}

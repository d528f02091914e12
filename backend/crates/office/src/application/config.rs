//! Application Configuration
//!
//! Configuration for the editor bridge application layer.

use std::time::Duration;

use crate::domain::services::EditorDefaults;

/// Path of the document server's editor loader, relative to its base URL
pub const DOCS_API_PATH: &str = "/web-apps/apps/api/documents/api.js";

/// Editor bridge configuration
#[derive(Debug, Clone)]
pub struct OfficeConfig {
    /// Document server base URL; `None` disables the editor
    pub server: Option<String>,
    /// Page title
    pub title: String,
    /// Public base URL of this service, used for the save callback
    pub hostname: String,
    /// Editor interface language
    pub lang: String,
    /// Whether the editor saves automatically
    pub autosave: bool,
    /// Shared secret with the document server; signing is off when unset
    pub jwt_secret: Option<String>,
    /// Lifetime of issued editor tokens (`exp` claim)
    pub token_ttl: Option<Duration>,
    /// Save targets must be on this host or one of its subdomains
    pub allowed_domain: Option<String>,
    /// Timeout of the document transfer on save
    pub transfer_timeout: Duration,
}

impl Default for OfficeConfig {
    fn default() -> Self {
        Self {
            server: None,
            title: "Office".to_string(),
            hostname: "http://localhost:8080".to_string(),
            lang: "fr-FR".to_string(),
            autosave: false,
            jwt_secret: None,
            token_ttl: None,
            allowed_domain: None,
            transfer_timeout: Duration::from_secs(60),
        }
    }
}

impl OfficeConfig {
    /// Config for a local document server container (unsigned, any target)
    pub fn development() -> Self {
        Self {
            server: Some("http://localhost:8000".to_string()),
            ..Default::default()
        }
    }

    /// Secret as bytes, `None` when unset or blank
    pub fn secret(&self) -> Option<&[u8]> {
        self.jwt_secret
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(str::as_bytes)
    }

    pub fn signing_enabled(&self) -> bool {
        self.secret().is_some()
    }

    /// URL of the document server's `api.js`
    pub fn docs_api_url(&self) -> Option<String> {
        self.server
            .as_deref()
            .map(|server| format!("{}{}", server.trim_end_matches('/'), DOCS_API_PATH))
    }

    pub fn token_ttl_chrono(&self) -> Option<chrono::Duration> {
        self.token_ttl
            .and_then(|ttl| chrono::Duration::from_std(ttl).ok())
    }

    pub fn editor_defaults(&self) -> EditorDefaults<'_> {
        EditorDefaults {
            hostname: &self.hostname,
            lang: &self.lang,
            autosave: self.autosave,
        }
    }
}

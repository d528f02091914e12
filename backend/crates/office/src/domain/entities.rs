//! Domain Entities
//!
//! The editor configuration handed to `DocsAPI.DocEditor` and the request it
//! is built from.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{CacheKey, DocumentType, EditorMode, FileType};

/// Document the user asked to open (decoded query parameters)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRequest {
    /// Location of the document on the file server
    pub file: String,
    /// Share token granting the document server access to `file`
    pub token: Option<String>,
    /// User shown in the editor
    pub user: String,
    /// Modification time reported by the file server
    pub mtime: String,
}

/// Editor configuration
///
/// Serialized as-is into the page and, when a secret is configured, signed
/// into the `token` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    pub document: DocumentSpec,
    pub document_type: DocumentType,
    pub editor_config: EditorSettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSpec {
    pub file_type: FileType,
    pub key: CacheKey,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSettings {
    pub lang: String,
    pub mode: EditorMode,
    pub callback_url: String,
    pub customization: Customization,
    pub user: EditorUser,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customization {
    pub autosave: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorUser {
    pub id: String,
    pub name: String,
}

impl EditorUser {
    pub fn named(user: &str) -> Self {
        Self {
            id: user.to_string(),
            name: user.to_string(),
        }
    }
}

impl EditorConfig {
    /// The configuration without its signature, i.e. the JWT payload
    pub fn unsigned(&self) -> EditorConfig {
        EditorConfig {
            token: None,
            ..self.clone()
        }
    }

    pub fn is_signed(&self) -> bool {
        self.token.is_some()
    }
}

/// Save callback posted by the document server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveCallback {
    pub key: String,
    pub status: i64,
    /// Where the edited document can be downloaded (statuses 2 and 6)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<String>,
    /// Signed copy of the callback when the document server uses JWT
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Callback as carried in an `Authorization: Bearer` token
#[derive(Debug, Clone, Deserialize)]
pub struct WrappedCallback {
    pub payload: SaveCallback,
}

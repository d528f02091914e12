//! Domain Value Objects
//!
//! Immutable value types for the editor bridge domain.

use serde::{Deserialize, Serialize};
use std::fmt;

use platform::crypto::sha256_hex;
use platform::uri::file_extension;

/// Extensions the editor opens in edit mode; everything else is view only
const EDITABLE_TYPES: [&str; 3] = ["docx", "xlsx", "pptx"];

const CELL_TYPES: &[&str] = &[
    "xls", "xlsx", "xlsm", "xlsb", "xlt", "xltx", "xltm", "ods", "ots", "fods", "csv",
];
const SLIDE_TYPES: &[&str] = &[
    "ppt", "pptx", "pptm", "pps", "ppsx", "ppsm", "pot", "potx", "potm", "odp", "otp", "fodp",
];
const PDF_TYPES: &[&str] = &["pdf", "djvu", "xps", "oxps"];

/// File type, i.e. the lowercase extension of the requested document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FileType(String);

impl FileType {
    /// Extract the file type from a path or URL
    pub fn from_path(path: &str) -> Option<Self> {
        file_extension(path).map(|ext| Self(ext.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_editable(&self) -> bool {
        EDITABLE_TYPES.contains(&self.0.as_str())
    }

    pub fn document_type(&self) -> DocumentType {
        let ext = self.0.as_str();
        if CELL_TYPES.contains(&ext) {
            DocumentType::Cell
        } else if SLIDE_TYPES.contains(&ext) {
            DocumentType::Slide
        } else if PDF_TYPES.contains(&ext) {
            DocumentType::Pdf
        } else {
            DocumentType::Word
        }
    }

    pub fn editor_mode(&self) -> EditorMode {
        if self.is_editable() {
            EditorMode::Edit
        } else {
            EditorMode::View
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Editor family the document server loads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Word,
    Cell,
    Slide,
    Pdf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    Edit,
    View,
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorMode::Edit => f.write_str("edit"),
            EditorMode::View => f.write_str("view"),
        }
    }
}

/// Document cache key
///
/// The document server caches converted documents by key; a new key
/// (new modification time) forces a reload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CacheKey(String);

impl CacheKey {
    pub const LEN: usize = 20;

    /// First [`CacheKey::LEN`] hex characters of `SHA-256(file_name ++ mtime)`
    pub fn derive(file_name: &str, mtime: &str) -> Self {
        let mut digest = sha256_hex(format!("{file_name}{mtime}").as_bytes());
        digest.truncate(Self::LEN);
        Self(digest)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Status reported by the document server in a save callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackStatus {
    Editing,
    ReadyForSaving,
    SaveError,
    ClosedWithoutChanges,
    ForceSave,
    ForceSaveError,
    Unknown(i64),
}

impl CallbackStatus {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => CallbackStatus::Editing,
            2 => CallbackStatus::ReadyForSaving,
            3 => CallbackStatus::SaveError,
            4 => CallbackStatus::ClosedWithoutChanges,
            6 => CallbackStatus::ForceSave,
            7 => CallbackStatus::ForceSaveError,
            other => CallbackStatus::Unknown(other),
        }
    }

    /// Whether the callback carries a document that must be stored
    pub fn requires_save(&self) -> bool {
        matches!(
            self,
            CallbackStatus::ReadyForSaving | CallbackStatus::ForceSave
        )
    }

    /// Whether the document server reports a failure
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            CallbackStatus::SaveError | CallbackStatus::ForceSaveError
        )
    }
}

//! Office (Document Editor Bridge) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Editor configuration, cache keys, URL building
//! - `application/` - Open / save use cases and configuration
//! - `infra/` - HTTP document transfer
//! - `presentation/` - HTTP handlers, editor page, router
//!
//! ## Flow
//! 1. `GET /onlyoffice?file=..&token=..&user=..&mtime=..` renders a page that
//!    opens the document server's editor with a (signed) configuration.
//! 2. The document server downloads `file?token=..` and, once the document is
//!    closed or force-saved, posts to `/onlyoffice/save`.
//! 3. The callback handler streams the edited document back to the file server.
//!
//! ## Security Model
//! - Editor configurations are signed with HS256 when a shared secret is set
//! - Callbacks must carry a valid token when a shared secret is set
//! - Save targets can be restricted to one domain and its subdomains

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::OfficeConfig;
pub use error::{OfficeError, OfficeResult};
pub use infra::http::HttpDocumentTransfer;
pub use presentation::router::{office_router, office_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

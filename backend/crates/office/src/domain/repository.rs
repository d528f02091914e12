//! Repository Traits
//!
//! Interfaces to the outside world. Implementation is in infrastructure layer.

use url::Url;

use crate::error::OfficeResult;

/// Moves an edited document from the document server to the file server
#[trait_variant::make(DocumentTransfer: Send)]
pub trait LocalDocumentTransfer {
    /// Download `source` and upload it to `target` with HTTP PUT
    async fn transfer(&self, source: &Url, target: &Url) -> OfficeResult<()>;
}

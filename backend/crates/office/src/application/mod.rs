//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.

pub mod config;
pub mod open_document;
pub mod save_document;

pub use open_document::{OpenDocumentOutput, OpenDocumentUseCase};
pub use save_document::{SaveDocumentInput, SaveDocumentOutput, SaveDocumentUseCase};

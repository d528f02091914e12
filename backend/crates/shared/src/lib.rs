//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" shared by every crate:
//! - Common error types and result aliases
//! - HTTP problem responses (behind the `axum` feature)
//!
//! **Design Principle**: Only include things that have the same meaning
//! for the editor bridge, the platform helpers and the API binary.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}

pub use error::app_error::{AppError, AppResult};
pub use error::kind::ErrorKind;

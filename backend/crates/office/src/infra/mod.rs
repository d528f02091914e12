//! Infrastructure Layer
//!
//! Implementations of the domain's outbound interfaces.

pub mod http;

//! Presentation Layer
//!
//! HTTP handlers, DTOs, page rendering and router.

pub mod dto;
pub mod handlers;
pub mod page;
pub mod router;

//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (DocumentRequest, EditorConfig)
//! - Domain value objects (FileType, EditorMode, CacheKey, CallbackStatus)
//! - Domain services (URL and editor configuration building)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;

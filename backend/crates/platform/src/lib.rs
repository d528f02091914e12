//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256)
//! - URI encoding compatible with browser `encodeURI`
//! - Compact HS256 JSON Web Tokens (`jsonwebtoken`)

pub mod crypto;
pub mod jwt;
pub mod uri;

//! WishFlick Core - Shared domain types library.
//!
//! This crate provides the domain vocabulary used across all WishFlick
//! components:
//! - `app` - The client-side state containers (session + wishes)
//! - `integration-tests` - Cross-store scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no storage
//! access, no store logic. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money amounts, emails,
//!   and statuses
//! - [`models`] - Entity models: users, wishes, contributions, activities,
//!   and feed filters

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod types;

pub use models::*;
pub use types::*;
